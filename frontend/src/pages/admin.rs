use yew::prelude::*;

#[function_component(AdminDashboard)]
pub fn admin_dashboard() -> Html {
    html! {
        <div class="admin-page">
            <div class="admin-card">
                <h1>{"Admin Dashboard"}</h1>
                <div class="admin-badge">{"🚧"}</div>
                <h2>{"Coming Soon"}</h2>
                <p>{"We're working hard to bring you a powerful dashboard experience. Stay tuned for updates!"}</p>
            </div>
            <style>
                {r#"
                .admin-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 1rem 2rem;
                }
                .admin-card {
                    width: 100%;
                    max-width: 640px;
                    padding: 2.5rem;
                    text-align: center;
                    background: rgba(26, 26, 26, 0.85);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 16px;
                }
                .admin-badge {
                    width: 96px;
                    height: 96px;
                    margin: 1.5rem auto;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 3rem;
                    background: linear-gradient(45deg, #4a90e2, #8e44ad);
                    animation: admin-pulse 2s infinite;
                }
                .admin-card p {
                    color: #999;
                }
                @keyframes admin-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.6; }
                }
                "#}
            </style>
        </div>
    }
}
