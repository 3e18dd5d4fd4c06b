/// Posts inserted into an empty store on first start.
pub struct SamplePost {
    pub title: &'static str,
    pub slug: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub created_at: &'static str,
    pub updated_at: &'static str,
}

pub const SAMPLE_POSTS: [SamplePost; 3] = [
    SamplePost {
        title: "Welcome to BlogCraft",
        slug: "welcome-to-blogcraft",
        excerpt: "Discover the power of modern blogging with rich text editing, SEO optimization, and beautiful design.",
        content: r#"<h2>Welcome to BlogCraft</h2>
<p>BlogCraft is a modern blogging platform that combines beautiful design with powerful functionality. Whether you're a seasoned writer or just starting out, BlogCraft provides all the tools you need to create compelling content.</p>
<h3>Key Features</h3>
<ul>
  <li><strong>Rich Text Editor:</strong> Create beautiful content with our advanced WYSIWYG editor</li>
  <li><strong>SEO Optimization:</strong> Automatic slug generation and meta tag management</li>
  <li><strong>Responsive Design:</strong> Your blog looks great on all devices</li>
  <li><strong>Admin Dashboard:</strong> Easy content management with full CRUD operations</li>
</ul>
<p>Get started by visiting the <strong>Admin</strong> section to create your first blog post!</p>"#,
        created_at: "2024-01-15T00:00:00.000Z",
        updated_at: "2024-01-15T00:00:00.000Z",
    },
    SamplePost {
        title: "The Future of Web Development",
        slug: "future-of-web-development",
        excerpt: "Exploring the latest trends and technologies that are shaping the future of web development.",
        content: r#"<h2>The Future of Web Development</h2>
<p>Web development is evolving at an unprecedented pace. With new frameworks, tools, and methodologies emerging regularly, staying current has become both challenging and exciting.</p>
<h3>Current Trends</h3>
<p>Some of the most significant trends shaping web development today include:</p>
<ul>
  <li><strong>React and Next.js:</strong> Component-based architecture continues to dominate</li>
  <li><strong>TypeScript:</strong> Type safety is becoming essential for large applications</li>
  <li><strong>Jamstack:</strong> Static site generation with dynamic capabilities</li>
  <li><strong>Serverless:</strong> Function-as-a-Service changing how we think about backend</li>
</ul>
<blockquote>
  <p>"The best way to predict the future is to create it." - Peter Drucker</p>
</blockquote>
<p>As we look ahead, the focus remains on developer experience, performance, and user satisfaction.</p>"#,
        created_at: "2024-01-10T00:00:00.000Z",
        updated_at: "2024-01-12T00:00:00.000Z",
    },
    SamplePost {
        title: "Building Responsive Layouts",
        slug: "building-responsive-layouts",
        excerpt: "Learn the principles and techniques for creating layouts that work beautifully across all devices.",
        content: r#"<h2>Building Responsive Layouts</h2>
<p>Creating responsive layouts is fundamental to modern web development. With the variety of devices and screen sizes available today, ensuring your content looks great everywhere is crucial.</p>
<h3>Core Principles</h3>
<ol>
  <li><strong>Flexible Grid Systems:</strong> Use relative units instead of fixed pixels</li>
  <li><strong>Flexible Images:</strong> Images that scale with their container</li>
  <li><strong>Media Queries:</strong> Different styles for different screen sizes</li>
</ol>
<h3>Modern CSS Tools</h3>
<ul>
  <li><strong>CSS Grid:</strong> Two-dimensional layout system</li>
  <li><strong>Flexbox:</strong> One-dimensional layout method</li>
  <li><strong>Container Queries:</strong> Style based on container size</li>
  <li><strong>Logical Properties:</strong> Writing-mode relative properties</li>
</ul>
<p>Master these tools, and you'll be able to create layouts that adapt beautifully to any context.</p>"#,
        created_at: "2024-01-05T00:00:00.000Z",
        updated_at: "2024-01-05T00:00:00.000Z",
    },
];
