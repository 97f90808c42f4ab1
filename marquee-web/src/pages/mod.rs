//! Full page handlers using component system
//!
//! Pages compose multiple components into complete HTML responses.
//! All pages use the same base layout with HTMX and Tailwind CSS.

pub mod search;

use axum::response::Html;

pub use search::search_page;

/// Wraps page content in the shared document shell.
///
/// The shell loads HTMX and Tailwind from their CDNs and lets HTMX swap 404
/// fragments, which carry the "session expired" notice for evicted sessions.
pub fn render_page(title: &str, content: &str) -> Html<String> {
    let html = format!(
        r#"<!DOCTYPE html>
        <html lang="en">
        <head>
            <title>{title} - Marquee</title>
            <meta charset="utf-8">
            <meta name="viewport" content="width=device-width, initial-scale=1">
            <script src="https://cdn.tailwindcss.com"></script>
            <script src="https://unpkg.com/htmx.org@1.9.10"></script>
            <script>
                tailwind.config = {{
                    darkMode: 'class',
                    theme: {{
                        extend: {{
                            colors: {{
                                'marquee': {{
                                    300: '#fcd77a',
                                    400: '#fbc94a',
                                    500: '#f5b820',
                                    600: '#d99c0b'
                                }}
                            }}
                        }}
                    }}
                }}
            </script>
            <script>
                document.addEventListener('htmx:beforeSwap', function (evt) {{
                    if (evt.detail.xhr.status === 404) {{
                        evt.detail.shouldSwap = true;
                        evt.detail.isError = false;
                    }}
                }});
            </script>
        </head>
        <body class="bg-gray-900 text-white min-h-screen font-sans">
            <nav class="bg-gray-800 border-b border-gray-700">
                <div class="max-w-7xl mx-auto px-4 h-16 flex items-center">
                    <a href="/" class="text-xl font-bold text-marquee-400">🎬 Marquee</a>
                </div>
            </nav>

            <main class="max-w-7xl mx-auto px-4 py-8">
                {content}
            </main>
        </body>
        </html>"#
    );

    Html(html)
}
