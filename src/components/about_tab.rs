use leptos::prelude::*;

use crate::markdown::{parse_markdown, ABOUT_MARKDOWN};

#[component]
pub fn AboutTab() -> impl IntoView {
    view! {
        <div>
            <h3>"About This Test Page"</h3>
            <div class="about-copy" inner_html=parse_markdown(ABOUT_MARKDOWN)></div>
        </div>
    }
}
