//! Page Shell
//!
//! Server-rendered HTML for the dashboard: header, the signal panel with its
//! controls, the z-plane panel and the footer. Charts are inlined as SVG
//! taken from the same state snapshot as the rest of the page.

use crate::dashboard::{Series, ViewState};
use crate::render::svg::escape;
use crate::render::Svg;

const STYLE: &str = r#"
body { margin: 0; min-height: 100vh; display: flex; flex-direction: column; background: #111827; color: #f3f4f6; font-family: sans-serif; }
header, footer { background: #1f2937; }
nav { display: flex; justify-content: space-between; align-items: center; padding: 12px 24px; }
nav h1 { margin: 0; font-size: 1.25rem; }
nav .brand { color: #22d3ee; margin-right: 8px; }
nav .task { color: #9ca3af; }
main { flex-grow: 1; padding: 16px; }
main > h1 { text-align: center; color: #22d3ee; }
.grid { display: grid; grid-template-columns: 2fr 1fr; gap: 24px; }
.panel { background: #1f2937; padding: 16px; border-radius: 8px; }
.panel h2 { color: #67e8f9; margin-top: 0; }
.panel-head { display: flex; justify-content: space-between; align-items: center; }
.chart { min-height: 24rem; background: #374151; border-radius: 6px; display: flex; align-items: center; justify-content: center; overflow: hidden; }
.status { color: #9ca3af; }
.status.error { color: #f87171; padding: 0 16px; }
.controls { margin-top: 16px; display: flex; justify-content: center; gap: 16px; }
button { background: #0891b2; color: #fff; border: 0; border-radius: 6px; padding: 8px 16px; font-weight: bold; cursor: pointer; }
button:disabled { background: #6b7280; cursor: not-allowed; }
button.toggle { background: #4b5563; font-weight: normal; padding: 4px 12px; }
button.toggle.active { background: #0891b2; }
.legend { display: flex; justify-content: center; gap: 16px; margin-top: 8px; }
.legend .pole { color: #f87171; }
.legend .zero { color: #4ade80; }
.note { text-align: center; color: #9ca3af; font-size: 0.875rem; }
footer { margin-top: 32px; padding: 16px; text-align: center; font-size: 0.875rem; color: #9ca3af; }
"#;

/// Build the full page for `state`
pub fn render_page(state: &ViewState, signal: &Svg, plane: &Svg, year: i32) -> String {
    let mut html = String::with_capacity(16 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>CTG Monitor</title>\n");
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");

    html.push_str(&header());
    html.push_str("<main>\n<h1>Realtime Digital Filter Design</h1>\n<div class=\"grid\">\n");
    html.push_str(&signal_panel(state, signal));
    html.push_str(&plane_panel(state, plane));
    html.push_str("</div>\n</main>\n");
    html.push_str(&footer(year));
    html.push_str(&live_script(state.revision));

    html.push_str("</body>\n</html>\n");
    html
}

fn header() -> String {
    "<header><nav>\
     <div><span class=\"brand\">&#9829;</span><h1 style=\"display:inline\">CTG Monitor</h1></div>\
     <div><span class=\"task\">Task 06</span></div>\
     </nav></header>\n"
        .to_string()
}

fn signal_panel(state: &ViewState, signal: &Svg) -> String {
    let mut html = String::from("<section class=\"panel\" id=\"signal\">\n<div class=\"panel-head\">\n");
    html.push_str("<h2>Fetal Heart Rate (FHR)</h2>\n");

    if state.has_filtered() {
        html.push_str("<form method=\"post\" action=\"/show\">");
        for series in [Series::Original, Series::Filtered] {
            let class = if state.active == Some(series) {
                "toggle active"
            } else {
                "toggle"
            };
            html.push_str(&format!(
                "<button type=\"submit\" name=\"series\" value=\"{}\" class=\"{}\">{}</button>",
                series.as_str(),
                class,
                series.label()
            ));
        }
        html.push_str("</form>\n");
    }
    html.push_str("</div>\n");

    html.push_str("<div class=\"chart\">");
    if let Some(status) = state.status_line() {
        let class = if state.error.is_some() && !state.is_loading() {
            "status error"
        } else {
            "status"
        };
        html.push_str(&format!("<p class=\"{}\">{}</p>", class, escape(&status)));
    }
    if !signal.is_blank() {
        html.push_str(&signal.to_markup());
    }
    html.push_str("</div>\n");

    html.push_str(&controls(state));
    html.push_str("</section>\n");
    html
}

fn controls(state: &ViewState) -> String {
    let disabled = |off: bool| if off { " disabled" } else { "" };

    let mut html = String::from("<div class=\"controls\">\n");
    html.push_str(&format!(
        "<form method=\"post\" action=\"/select\"><select name=\"record\" onchange=\"this.form.submit()\"{}>",
        disabled(state.is_loading())
    ));
    if state.records.is_empty() {
        html.push_str("<option disabled selected>Loading records...</option>");
    } else {
        for record in &state.records {
            let selected = if state.selected.as_deref() == Some(record.as_str()) {
                " selected"
            } else {
                ""
            };
            let name = escape(record);
            html.push_str(&format!("<option value=\"{}\"{}>{}</option>", name, selected, name));
        }
    }
    html.push_str("</select></form>\n");

    let label = if state.is_loading() {
        "Loading..."
    } else {
        "Fetch and Process Record"
    };
    html.push_str(&format!(
        "<form method=\"post\" action=\"/fetch\"><button type=\"submit\"{}>{}</button></form>\n",
        disabled(!state.can_fetch()),
        label
    ));
    html.push_str("</div>\n");
    html
}

fn plane_panel(state: &ViewState, plane: &Svg) -> String {
    let mut html = String::from("<section class=\"panel\" id=\"zplane\">\n<h2>Filter Z-Plane</h2>\n");
    html.push_str(&plane.to_markup());
    html.push_str(
        "<div class=\"legend\"><span><b class=\"pole\">X</b> Pole</span>\
         <span><b class=\"zero\">O</b> Zero</span></div>\n",
    );

    if !state.coefficients.poles.is_empty() {
        let note = if state.coefficients.is_stable() {
            "All poles inside the unit circle: filter is stable."
        } else {
            "Pole on or outside the unit circle: filter is unstable."
        };
        html.push_str(&format!("<p class=\"note\">{}</p>\n", note));
    }
    if let Some(message) = &state.message {
        html.push_str(&format!("<p class=\"note\">{}</p>\n", escape(message)));
    }

    html.push_str("</section>\n");
    html
}

fn footer(year: i32) -> String {
    format!(
        "<footer><p>&copy; {} CTG Heart Failure Monitoring Project. All Rights Reserved.</p></footer>\n",
        year
    )
}

/// Reload whenever the server reports a newer revision
fn live_script(revision: u64) -> String {
    format!(
        r#"<script>
(function () {{
  var rendered = {};
  var proto = location.protocol === "https:" ? "wss://" : "ws://";
  var socket = new WebSocket(proto + location.host + "/ws");
  socket.onmessage = function (event) {{
    var msg = JSON.parse(event.data);
    if (msg.type === "state_changed" && msg.revision > rendered) {{
      location.reload();
    }}
  }};
}})();
</script>
"#,
        revision
    )
}
