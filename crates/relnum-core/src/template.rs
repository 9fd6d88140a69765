// ABOUTME: Markup for a single gutter number phantom
// ABOUTME: Small HTML fragment with inline CSS for color and padding

use relnum_types::{Color, PHANTOM_KEY};

use crate::line_numbers::LineNumber;

/// Render the phantom body for one line number
pub fn render(color: &Color, number: &LineNumber) -> String {
    format!(
        r#"
<body id="{key}">
    <style>
        .num{value} {{
            padding-right: 4px;
            color: {color};
        }}
    </style>
    <div class="num{value}">{text}</div>
</body>
"#,
        key = PHANTOM_KEY,
        value = number.value,
        color = color,
        text = number.text,
    )
}
