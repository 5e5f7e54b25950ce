use yew::prelude::*;

mod chart;
mod components;
mod services;

use components::balance_chart::{BalanceChart, ChartVariant};

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <header class="header">
                <div class="container">
                    <h1>{"Account Balances"}</h1>
                </div>
            </header>

            <main class="main">
                <div class="container">
                    <section class="chart-section">
                        <h2>{"Balance History"}</h2>
                        <BalanceChart variant={ChartVariant::Dated} />
                    </section>

                    <section class="chart-section">
                        <h2>{"Balances by Account"}</h2>
                        <BalanceChart variant={ChartVariant::Classic} />
                    </section>
                </div>
            </main>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
