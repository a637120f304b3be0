// templates/pages/home.rs

use crate::templates::{components::card, desktop_layout};
use maud::{html, Markup};

pub fn home_page(property_count: usize) -> Markup {
    desktop_layout(
        "Landlist",
        html! {
            h1 { "Landlist" }
            p { (property_count) " properties loaded." }

            (card("Search", html! {
                p {
                    "GET " code { "/api/properties" }
                    " with optional " code { "category" } ", " code { "q" } ", "
                    code { "lat" } "/" code { "lng" } "/" code { "radius" } " params."
                }
            }))

            (card("Transfer", html! {
                p {
                    "POST " code { "/api/transfers" }
                    " with a JSON body of propertyId, recipientEmail, notes, document."
                }
            }))
        },
    )
}
