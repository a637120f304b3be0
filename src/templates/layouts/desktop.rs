use maud::{html, Markup, DOCTYPE};

pub fn desktop_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style {
                    "body { font-family: system-ui, sans-serif; max-width: 720px; margin: 4rem auto; padding: 1rem; }"
                    ".card { border: 1px solid #ddd; border-radius: 8px; padding: 1rem; margin: 1rem 0; }"
                    "code { background: #f4f4f4; padding: 0.2rem 0.4rem; border-radius: 6px; }"
                }
            }
            body {
                header {
                    h3 { "Landlist" }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                        }
                    }
                }
                (content)
            }
        }
    }
}
