use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1 class="byte-glow">{"404"}</h1>
            <p>{"This page doesn't exist. Maybe it was never compiled."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to Home"}
            </Link<Route>>
            <style>
                {r#"
                .not-found-page {
                    min-height: 80vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 1.5rem;
                    padding-top: 80px;
                    text-align: center;
                }
                .not-found-page h1 {
                    font-size: 6rem;
                    margin: 0;
                }
                .not-found-page p {
                    color: #999;
                }
                "#}
            </style>
        </div>
    }
}
