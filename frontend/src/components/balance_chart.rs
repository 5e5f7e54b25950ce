use shared::BalancesResource;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::chart::draw::{self, DrawOptions};
use crate::chart::model::ChartModel;
use crate::services::api::ApiClient;

/// The two markup variants of the balance chart. They differ in canvas
/// id, legend visibility, point markers, and tick rendering; a page
/// must use the variant its markup was written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartVariant {
    /// Visible legend and point markers, labels rendered as-is.
    Classic,
    /// Hidden legend, no markers, "Mar 2024" style tick labels capped
    /// at 20 visible ticks.
    Dated,
}

impl ChartVariant {
    /// DOM id of the canvas this variant draws on.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartVariant::Classic => "balanceChart",
            ChartVariant::Dated => "balance-chart",
        }
    }

    fn draw_options(&self) -> DrawOptions {
        match self {
            ChartVariant::Classic => DrawOptions {
                show_legend: true,
                point_radius: 3,
                month_year_ticks: false,
            },
            ChartVariant::Dated => DrawOptions {
                show_legend: false,
                point_radius: 0,
                month_year_ticks: true,
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BalanceChartProps {
    #[prop_or(ChartVariant::Dated)]
    pub variant: ChartVariant,
    /// Origin of the balances resource; same-origin when empty.
    #[prop_or_default]
    pub base_url: String,
}

pub enum Msg {
    FetchCompleted(Result<BalancesResource, String>),
}

/// Line chart of account balances over time.
///
/// Draws a zero-valued placeholder synchronously on first render, then
/// issues a single fire-and-forget fetch of the balances resource. A
/// successful load replaces the model and triggers exactly one redraw;
/// a failed load leaves the placeholder on screen.
pub struct BalanceChart {
    canvas_ref: NodeRef,
    model: ChartModel,
}

impl Component for BalanceChart {
    type Message = Msg;
    type Properties = BalanceChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
            model: ChartModel::placeholder(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FetchCompleted(outcome) => {
                if let Err(ref err) = outcome {
                    gloo::console::error!("Failed to load balances resource:", err.clone());
                }
                if apply_fetch_outcome(&mut self.model, outcome) {
                    self.draw_chart(ctx);
                    gloo::console::log!(format!("{:?}", self.model));
                }
                false
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        // Placeholder renders synchronously; the fetch resolves later
        // on the same event loop.
        self.draw_chart(ctx);

        let api_client = ApiClient::with_base_url(ctx.props().base_url.clone());
        let link = ctx.link().clone();
        spawn_local(async move {
            let outcome = api_client.get_balances().await;
            link.send_message(Msg::FetchCompleted(outcome));
        });
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="balance-chart-container">
                <canvas
                    ref={self.canvas_ref.clone()}
                    id={ctx.props().variant.canvas_id()}
                    width="800"
                    height="400"
                ></canvas>
            </div>
        }
    }
}

impl BalanceChart {
    fn draw_chart(&self, ctx: &Context<Self>) {
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            gloo::console::error!("Balance chart canvas is missing from the page");
            return;
        };
        let options = ctx.props().variant.draw_options();
        if let Err(err) = draw::draw_chart(canvas, &self.model, options) {
            gloo::console::error!(format!("Failed to render balance chart: {:#}", err));
        }
    }
}

/// Apply a completed fetch to the model. Returns whether a redraw is
/// needed; a failed fetch leaves the model untouched.
fn apply_fetch_outcome(model: &mut ChartModel, outcome: Result<BalancesResource, String>) -> bool {
    match outcome {
        Ok(resource) => {
            model.apply_resource(resource);
            true
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::model::ChartPhase;

    #[test]
    fn successful_fetch_populates_model_and_requests_redraw() {
        let payload = r#"{
            "dates": ["2024-01", "2024-02"],
            "balances": {"checking": [1, 2], "savings": [3, 4]}
        }"#;
        let resource: BalancesResource = serde_json::from_str(payload).unwrap();

        let mut model = ChartModel::placeholder();
        assert!(apply_fetch_outcome(&mut model, Ok(resource)));

        assert_eq!(model.phase, ChartPhase::Populated);
        assert_eq!(model.datasets.len(), 2);
        assert_eq!(model.datasets[0].label, "checking");
    }

    #[test]
    fn failed_fetch_leaves_model_untouched() {
        let mut model = ChartModel::placeholder();
        let before = model.clone();

        assert!(!apply_fetch_outcome(
            &mut model,
            Err("network unreachable".to_string())
        ));
        assert_eq!(model, before);
        assert_eq!(model.phase, ChartPhase::Placeholder);
    }

    #[test]
    fn variants_target_distinct_canvas_ids() {
        assert_eq!(ChartVariant::Classic.canvas_id(), "balanceChart");
        assert_eq!(ChartVariant::Dated.canvas_id(), "balance-chart");
        assert_ne!(
            ChartVariant::Classic.canvas_id(),
            ChartVariant::Dated.canvas_id()
        );
    }

    #[test]
    fn dated_variant_suppresses_markers_and_legend() {
        let options = ChartVariant::Dated.draw_options();
        assert!(!options.show_legend);
        assert_eq!(options.point_radius, 0);
        assert!(options.month_year_ticks);

        let options = ChartVariant::Classic.draw_options();
        assert!(options.show_legend);
        assert!(options.point_radius > 0);
        assert!(!options.month_year_ticks);
    }
}
