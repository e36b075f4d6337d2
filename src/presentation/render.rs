//! HTML page and SVG gauge rendering.
//!
//! The page is rendered in one piece per request: the slider form always, the
//! output region only when a full report is available.

use std::f64::consts::PI;
use std::fmt::Write;

use crate::intake::{VitalsForm, FIELDS};

use super::domain::{Emphasis, GaugeSpec, RiskReport};

pub const PAGE_TITLE: &str = "Diabetic Retinopathy Risk Predictor";
pub const INTRO: &str = "Enter patient details below to predict the risk of diabetic retinopathy.";
pub const BUTTON_LABEL: &str = "Predict Retinopathy Risk";
pub const CAPTION: &str = "Developed with love for Diabetic Retinopathy Prediction Awareness";

const SVG_WIDTH: f64 = 600.0;
const SVG_HEIGHT: f64 = 400.0;
const CX: f64 = 300.0;
const CY: f64 = 330.0;
const RADIUS: f64 = 220.0;
const BAND_WIDTH: f64 = 60.0;

const STYLE: &str = "body{font-family:Arial,sans-serif;margin:2rem auto;max-width:960px;color:#000}\
.field{margin:1rem 0}.field input{width:100%}\
.msg{padding:.75rem 1rem;border-radius:.5rem;margin:1rem 0}\
.success{background:#e6f4ea;color:#1e4620}.warning{background:#fff8e1;color:#5f4b00}\
.error{background:#fdecea;color:#611a15}\
button{padding:.5rem 1.25rem;font-size:1rem}.caption{color:#666;font-size:.85rem}";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Number shown inside the gauge: at most two decimals, trailing zeros dropped.
pub fn format_gauge_number(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

fn polar(radius: f64, value: f64, max: f64) -> (f64, f64) {
    let theta = PI * (1.0 - value.clamp(0.0, max) / max);
    (CX + radius * theta.cos(), CY - radius * theta.sin())
}

fn arc_path(radius: f64, from: f64, to: f64, max: f64) -> String {
    let (x1, y1) = polar(radius, from, max);
    let (x2, y2) = polar(radius, to, max);
    format!("M {x1:.2} {y1:.2} A {radius:.2} {radius:.2} 0 0 1 {x2:.2} {y2:.2}")
}

/// Draw the three-band gauge with its value bar, threshold marker and number.
pub fn render_gauge_svg(gauge: &GaugeSpec) -> String {
    let max = gauge.max;
    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {SVG_WIDTH} {SVG_HEIGHT}" role="img" aria-label="{title}">"#,
        title = escape_html(gauge.title)
    );
    let _ = write!(svg, r#"<rect width="100%" height="100%" fill="lavender"/>"#);
    let _ = write!(
        svg,
        r#"<text x="{CX}" y="50" text-anchor="middle" font-size="28">{}</text>"#,
        escape_html(gauge.title)
    );

    for band in &gauge.bands {
        let _ = write!(
            svg,
            r#"<path class="band band-{}" d="{}" fill="none" stroke="{}" stroke-width="{BAND_WIDTH}"/>"#,
            band.tier.as_str(),
            arc_path(RADIUS, band.from, band.to, max),
            band.color
        );
    }

    let half = BAND_WIDTH / 2.0;
    for r in [RADIUS - half, RADIUS + half] {
        let _ = write!(
            svg,
            r#"<path d="{}" fill="none" stroke="black" stroke-width="3"/>"#,
            arc_path(r, gauge.min, max, max)
        );
    }

    for tick in (0..=10).map(|i| f64::from(i) * max / 10.0) {
        let (x1, y1) = polar(RADIUS + half, tick, max);
        let (x2, y2) = polar(RADIUS + half + 8.0, tick, max);
        let (tx, ty) = polar(RADIUS + half + 22.0, tick, max);
        let _ = write!(
            svg,
            r#"<line x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="black" stroke-width="1.5"/><text x="{tx:.2}" y="{ty:.2}" text-anchor="middle" font-size="12">{}</text>"#,
            format_gauge_number(tick)
        );
    }

    if gauge.value > gauge.min {
        let _ = write!(
            svg,
            r#"<path class="bar" d="{}" fill="none" stroke="darkblue" stroke-width="{:.1}"/>"#,
            arc_path(RADIUS, gauge.min, gauge.value, max),
            BAND_WIDTH * 0.2
        );
    }

    let reach = BAND_WIDTH * 0.9 / 2.0;
    let (x1, y1) = polar(RADIUS - reach, gauge.threshold, max);
    let (x2, y2) = polar(RADIUS + reach, gauge.threshold, max);
    let _ = write!(
        svg,
        r#"<line class="threshold" x1="{x1:.2}" y1="{y1:.2}" x2="{x2:.2}" y2="{y2:.2}" stroke="black" stroke-width="8"/>"#
    );

    let _ = write!(
        svg,
        r#"<text class="number" x="{CX}" y="{:.0}" text-anchor="middle" font-size="36">{}{}</text></svg>"#,
        CY - 20.0,
        format_gauge_number(gauge.value),
        escape_html(gauge.suffix)
    );
    svg
}

fn message(out: &mut String, emphasis: Emphasis, text: &str) {
    let _ = write!(
        out,
        r#"<div class="msg {}" role="status">{}</div>"#,
        emphasis.as_str(),
        escape_html(text)
    );
}

fn render_form(out: &mut String, values: &VitalsForm) {
    let current = [
        values.age,
        values.systolic_bp,
        values.diastolic_bp,
        values.cholesterol,
    ];
    let _ = write!(out, r#"<form method="post" action="/predict">"#);
    for (field, value) in FIELDS.iter().zip(current) {
        let _ = write!(
            out,
            r#"<div class="field"><label for="{key}">{label}: <output id="{key}-out">{value}</output></label><input type="range" id="{key}" name="{key}" min="{min}" max="{max}" step="1" value="{value}" oninput="document.getElementById('{key}-out').value=this.value"></div>"#,
            key = field.key,
            label = escape_html(field.label),
            min = field.min,
            max = field.max,
            value = value
        );
    }
    let _ = write!(
        out,
        r#"<button type="submit">{}</button></form>"#,
        escape_html(BUTTON_LABEL)
    );
}

/// Output region: banner, probability text, gauge and advisory.
pub fn render_report(report: &RiskReport) -> String {
    let mut out = String::from(r#"<section id="result">"#);
    message(&mut out, report.banner.emphasis, report.banner.text);
    let _ = write!(
        out,
        "<h3>Risk Probability: <strong>{}</strong></h3>",
        escape_html(&report.probability_text)
    );
    out.push_str(&render_gauge_svg(&report.gauge));
    message(&mut out, report.advisory.emphasis, report.advisory.text);
    out.push_str("</section>");
    out
}

/// Full page. `report` fills the output region; `error` replaces it with a failure notice.
pub fn render_page(values: &VitalsForm, report: Option<&RiskReport>, error: Option<&str>) -> String {
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{title}</title><style>{STYLE}</style></head><body><h1>{title}</h1><p>{intro}</p>"#,
        title = escape_html(PAGE_TITLE),
        intro = escape_html(INTRO)
    );
    render_form(&mut out, values);
    if let Some(report) = report {
        out.push_str(&render_report(report));
    } else if let Some(error) = error {
        message(&mut out, Emphasis::Error, error);
    }
    let _ = write!(
        out,
        r#"<hr><p class="caption">{}</p></body></html>"#,
        escape_html(CAPTION)
    );
    out
}
