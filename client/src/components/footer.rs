//! Site footer.

use leptos::prelude::*;

const LINK_GROUPS: [(&str, [&str; 3]); 3] = [
    ("Product", ["Features", "Pricing", "Security"]),
    ("Company", ["About", "Blog", "Careers"]),
    ("Legal", ["Privacy", "Terms", "Contact"]),
];

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <span class="footer__name">"Smart Meal Finder"</span>
                    <p>"Discover recipes with AI. Your culinary companion in the kitchen."</p>
                </div>
                {LINK_GROUPS
                    .iter()
                    .map(|(heading, links)| {
                        view! {
                            <div class="footer__group">
                                <h4>{*heading}</h4>
                                <ul>
                                    {links
                                        .iter()
                                        .map(|link| view! { <li><a href="#">{*link}</a></li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="footer__copyright">"© 2026 Smart Meal Finder. All rights reserved."</p>
        </footer>
    }
}
