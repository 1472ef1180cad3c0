/// Lorem-ipsum filler content for placeholder components.
const LOREM_PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. \
Nullam in dui mauris. Vivamus hendrerit arcu sed erat molestie vehicula. \
Sed auctor neque eu tellus rhoncus ut eleifend nibh porttitor. Ut in nulla enim. \
Phasellus molestie magna non est bibendum non venenatis nisl tempor. \
Suspendisse dictum feugiat nisl ut dapibus.";

/// Generate `paragraphs` lorem-ipsum paragraphs separated by blank lines.
pub fn generate(paragraphs: usize) -> String {
    vec![LOREM_PARAGRAPH; paragraphs].join("\n\n")
}
