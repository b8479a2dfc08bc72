use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub total: usize,
    pub active: usize,
    pub cancelled: usize,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // swatch | label | value
    let swatch_style = "width:12px; height:12px; border-radius:50%; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:40px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";
    let released = props.total.saturating_sub(props.active + props.cancelled);
    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); color:#e6edf3; border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:180px; display:flex; flex-direction:column; gap:8px; font-size:14px; pointer-events:none;">
            <div style={row_style}>
                <span style={format!("{} background:#3fb950;", swatch_style)}></span>
                <span style={label_style}>{"Down"}</span>
                <span style={value_style}>{ props.active }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} background:#8b949e;", swatch_style)}></span>
                <span style={label_style}>{"Released"}</span>
                <span style={value_style}>{ released }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} background:#f85149;", swatch_style)}></span>
                <span style={label_style}>{"Cancelled"}</span>
                <span style={value_style}>{ props.cancelled }</span>
            </div>
            { if props.total == 0 { html!{ <div style="font-size:11px; opacity:0.7;">{"Touch the canvas with one or more fingers"}</div> } } else { html!{} } }
        </div>
    }
}
