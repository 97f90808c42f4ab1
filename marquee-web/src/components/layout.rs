//! Layout components - headers, buttons, inputs

/// Escapes text for use in HTML content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders a page header with title and optional subtitle.
pub fn page_header(title: &str, subtitle: Option<&str>) -> String {
    let subtitle_html = subtitle
        .map(|s| format!(r#"<p class="text-gray-400 mt-2">{s}</p>"#))
        .unwrap_or_default();

    format!(
        r#"<div class="mb-8">
            <h1 class="text-3xl font-bold text-white">{title}</h1>
            {subtitle_html}
        </div>"#
    )
}

/// Renders a button with Tailwind styling.
///
/// Supports additional HTML attributes such as HTMX request attributes.
pub fn button(text: &str, variant: &str, attributes: Option<&str>) -> String {
    let base_classes = "px-5 py-2 rounded-lg font-medium transition-colors focus:outline-none focus:ring-2 focus:ring-offset-2 focus:ring-offset-gray-900";

    let variant_classes = match variant {
        "primary" => "bg-marquee-500 hover:bg-marquee-600 text-white focus:ring-marquee-500",
        "secondary" => "bg-gray-700 hover:bg-gray-600 text-white focus:ring-gray-500",
        _ => "bg-gray-600 hover:bg-gray-700 text-white focus:ring-gray-500",
    };

    let attrs = attributes.unwrap_or("");

    format!(r#"<button type="button" class="{base_classes} {variant_classes}" {attrs}>{text}</button>"#)
}

/// Renders a text input with Tailwind styling.
pub fn text_input(id: &str, name: &str, value: &str, placeholder: &str, attributes: &str) -> String {
    let value = escape_html(value);

    format!(
        r#"<input type="text" id="{id}" name="{name}" value="{value}" placeholder="{placeholder}" autocomplete="off"
                  class="flex-1 px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:ring-2 focus:ring-marquee-500 focus:border-transparent"
                  {attributes} />"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"Tom & Jerry's"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&#39;s&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_text_input_escapes_value() {
        let html = text_input("q", "text", r#"a"b"#, "Search", "");
        assert!(html.contains(r#"value="a&quot;b""#));
    }
}
