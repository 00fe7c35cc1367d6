//! HTML documents shown in the preview panel.
//!
//! Nothing here escapes its input. The rule body goes straight into the
//! stylesheet so every declaration applies to the preview box, and the content
//! property's value is inserted as markup.

use crate::config::PreviewConfig;
use crate::style::property_map::PropertyMap;

/// Page chrome: guidelines, heading and the container of the preview box.
const PAGE_STYLE: &str = r#"
    * {
        margin: 0;
        padding: 0;
    }
    body {
        position: relative;
        width: 100%;
        padding: 0 20px;
        margin: 0;
        box-sizing: border-box;
        overflow-x: hidden;
        overflow-y: scroll;
        font-family: verdana;
        background-color: white;
    }
    .guideline {
        position: absolute;
        top: 0;
        z-index: 1;
        width: 20px;
        height: calc(100% + 16px);
        min-height: 100vh;
        background-color: rgba(255, 230, 191, 0.8);
    }
    .guideline.left {
        left: 0;
    }
    .guideline.right {
        right: 0;
    }
    .guideline.top {
        position: relative;
        width: 100%;
        height: auto;
        min-height: auto;
        padding: 10px 0;
    }
    h1 {
        margin-bottom: 10px;
        color: #555;
        font-size: 16px;
        font-weight: 100;
    }
    .container {
        position: relative;
        z-index: 0;
    }"#;

/// Height label, drawn vertically to the right of the box.
const HEIGHT_LABEL_STYLE: &str = r#"
        position: absolute;
        right: 0;
        top: 50%;
        z-index: 2;
        transform: translate(calc(100% + 5px), -50%);
        width: 15px;
        writing-mode: vertical-rl;
        text-orientation: sideways;
        font-size: 10px;
        color: #777;
        line-height: 2;"#;

/// Width label, drawn under the box.
const WIDTH_LABEL_STYLE: &str = r#"
        position: absolute;
        bottom: 0;
        left: 50%;
        z-index: 2;
        transform: translate(-50%, calc(100% + 5px));
        height: 15px;
        font-size: 10px;
        color: #777;
        line-height: 1;"#;

/// Render the preview of a located rule.
///
/// `body_text` is the raw rule body; `properties` supplies the `width` and
/// `height` labels and the content property named in `config`. Missing values
/// render as empty strings.
pub fn render_rule(
    selector: &str,
    body_text: &str,
    properties: &PropertyMap,
    config: &PreviewConfig,
) -> String {
    let height = properties.get_or_empty("height");
    let width = properties.get_or_empty("width");
    let content = properties.get_or_empty(&config.content_property);

    let mut html = String::with_capacity(PAGE_STYLE.len() + body_text.len() + 1024);

    html.push_str("<style>");
    html.push_str(PAGE_STYLE);
    html.push_str(
        r#"
    .selected-element {
        position: relative;
        box-sizing: border-box;
        border: 1px dashed #777;
        color: black;
"#,
    );
    html.push_str(body_text);
    html.push_str("\n    }\n    .selected-element:before {\n        content: '");
    html.push_str(height);
    html.push_str("';");
    html.push_str(HEIGHT_LABEL_STYLE);
    html.push_str("\n    }\n    .selected-element:after {\n        content: '");
    html.push_str(width);
    html.push_str("';");
    html.push_str(WIDTH_LABEL_STYLE);
    html.push_str("\n    }\n</style>\n");

    html.push_str(
        r#"<body>
    <div class="guideline left"></div>
    <div class="guideline right"></div>
    <div class="guideline top">
        <h1>"#,
    );
    html.push_str(selector);
    html.push_str(
        r#"</h1>
    </div>
    <div class="container">
        <div class="selected-element">"#,
    );
    html.push_str(content);
    html.push_str("</div>\n    </div>\n</body>\n");

    html
}

/// Render a page that only shows `message`.
pub fn render_error(message: &str) -> String {
    format!("<body>\n    {}\n</body>\n", message)
}
