use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::*;
use crate::server_fns::provide_session;

/// Lottie player used by the hero animation
pub const LOTTIE_SCRIPT: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/lottie-web/5.12.2/lottie.min.js";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/mlshelf.css"/>
        <Title text="MLShelf - Your Tiny ML Model Hub"/>
        <Meta name="description" content="Discover, share, and deploy lightweight machine learning models optimized for edge devices"/>
        <Script src=LOTTIE_SCRIPT defer="true"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=|| view! { <HomePage backdrop=true/> }/>
            </Routes>
        </Router>
    }
}
