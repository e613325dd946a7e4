// HTML rendering of the dashboard layout
use crate::domain::figure::ChartKind;
use crate::domain::layout::{ChartSlot, Dropdown, Layout};
use std::fmt::Write;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Fetches both figures whenever a dropdown changes. A response that
/// arrives after a newer request was issued is dropped.
const SCRIPT: &str = r#"
(function () {
  const selects = Array.from(document.querySelectorAll("select[data-param]"));
  let latest = 0;

  function draw(figure) {
    const trace = {
      x: figure.points.map(p => p.date),
      y: figure.points.map(p => p.sales),
      type: figure.kind === "bar" ? "bar" : "scatter",
      mode: figure.kind === "bar" ? undefined : "lines",
    };
    Plotly.react(figure.id, [trace], {
      title: { text: figure.title },
      xaxis: { title: { text: figure.x_label } },
      yaxis: { title: { text: figure.y_label } },
    });
  }

  async function refresh() {
    const ticket = ++latest;
    const params = new URLSearchParams();
    selects.forEach(s => params.set(s.dataset.param, s.value));
    const response = await fetch("/api/figures?" + params.toString());
    if (!response.ok || ticket !== latest) {
      return;
    }
    const figures = await response.json();
    if (ticket !== latest) {
      return;
    }
    draw(figures.line);
    draw(figures.bar);
  }

  function update() {
    refresh().catch(err => console.error("figure update failed", err));
  }

  selects.forEach(s => s.addEventListener("change", update));
  update();
})();
"#;

pub fn render_page(layout: &Layout) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape(&layout.heading));

    for dropdown in &layout.dropdowns {
        render_dropdown(&mut body, dropdown);
    }
    for chart in &layout.charts {
        render_chart_slot(&mut body, chart);
    }

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<script src=\"{cdn}\"></script>\n</head>\n\
         <body>\n{body}<script>{script}</script>\n</body>\n</html>\n",
        title = escape(&layout.heading),
        cdn = PLOTLY_CDN,
        body = body,
        script = SCRIPT,
    )
}

fn render_dropdown(out: &mut String, dropdown: &Dropdown) {
    // No empty option: the control can never be cleared
    let _ = writeln!(
        out,
        "<select id=\"{}\" data-param=\"{}\">",
        escape(&dropdown.id),
        escape(&dropdown.param)
    );
    for option in &dropdown.options {
        let selected = if option.value == dropdown.value { " selected" } else { "" };
        let _ = writeln!(
            out,
            "  <option value=\"{}\"{}>{}</option>",
            escape(&option.value),
            selected,
            escape(&option.label)
        );
    }
    let _ = writeln!(out, "</select>");
}

fn render_chart_slot(out: &mut String, chart: &ChartSlot) {
    let kind = match chart.kind {
        ChartKind::Line => "line",
        ChartKind::Bar => "bar",
    };
    let _ = writeln!(
        out,
        "<div id=\"{}\" class=\"chart chart-{}\"></div>",
        escape(&chart.id),
        kind
    );
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
