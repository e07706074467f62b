//! SVG area chart of daily uptime percentage.

use aw_model::chart::ChartDatum;
use leptos::prelude::*;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 250.0;
const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 28.0;

#[component]
pub fn UptimeChart(#[prop(into)] data: Signal<Vec<ChartDatum>>) -> impl IntoView {
    let (hovered, set_hovered) = signal(None::<usize>);

    view! {
        <div style="margin-top: 1.5rem; width: 100%;">
            <div style="height: 1.25rem; font-size: 0.8rem; color: #94a3b8;">
                {move || {
                    let points = data.get();
                    hovered
                        .get()
                        .and_then(|i| points.get(i).cloned())
                        .map(|d| format!("{}: {:.2}%", d.label, d.uptime_percent))
                        .unwrap_or_default()
                }}
            </div>
            {move || {
                let points = data.get();
                if points.is_empty() {
                    return view! { <p style="color: #64748b;">"No uptime data."</p> }.into_any();
                }

                let grid = [0.0f64, 25.0, 50.0, 75.0, 100.0]
                    .iter()
                    .map(|&pct| {
                        let y = y_pos(pct);
                        view! {
                            <line
                                x1=MARGIN_LEFT
                                y1=y
                                x2={WIDTH - MARGIN_RIGHT}
                                y2=y
                                stroke="#1e293b"
                                stroke-dasharray="3 3"
                            />
                            <text
                                x={MARGIN_LEFT - 8.0}
                                y={y + 4.0}
                                fill="#0075ff"
                                font-size="11"
                                text-anchor="end"
                            >
                                {format!("{pct}%")}
                            </text>
                        }
                    })
                    .collect::<Vec<_>>();

                let ticks = points
                    .iter()
                    .enumerate()
                    .map(|(i, d)| {
                        view! {
                            <text
                                x={x_pos(i, points.len())}
                                y={HEIGHT - MARGIN_BOTTOM + 16.0}
                                fill="#0075ff"
                                font-size="11"
                                text-anchor="middle"
                            >
                                {d.day.to_string()}
                            </text>
                        }
                    })
                    .collect::<Vec<_>>();

                let dots = points
                    .iter()
                    .enumerate()
                    .map(|(i, d)| {
                        view! {
                            <circle
                                cx={x_pos(i, points.len())}
                                cy={y_pos(d.uptime_percent)}
                                r="3"
                                fill="#0075ff"
                                on:mouseenter=move |_| set_hovered.set(Some(i))
                                on:mouseleave=move |_| set_hovered.set(None)
                            />
                        }
                    })
                    .collect::<Vec<_>>();

                view! {
                    <svg
                        viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                        width="100%"
                        height="250"
                        preserveAspectRatio="none"
                    >
                        {grid}
                        <path d=area_path(&points) fill="#0075ff" fill-opacity="0.25" />
                        <polyline
                            points=line_points(&points)
                            fill="none"
                            stroke="#0075ff"
                            stroke-width="2"
                        />
                        {dots}
                        {ticks}
                    </svg>
                }
                .into_any()
            }}
        </div>
    }
}

fn x_pos(index: usize, count: usize) -> f64 {
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    if count <= 1 {
        return MARGIN_LEFT + plot_width / 2.0;
    }
    MARGIN_LEFT + plot_width * index as f64 / (count - 1) as f64
}

fn y_pos(percent: f64) -> f64 {
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    MARGIN_TOP + plot_height * (100.0 - percent) / 100.0
}

/// Closed outline of the filled area: the uptime line down to the
/// baseline and back.
fn area_path(points: &[ChartDatum]) -> String {
    let mut path = String::new();
    for (i, d) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        path.push_str(&format!(
            "{cmd}{:.2},{:.2} ",
            x_pos(i, points.len()),
            y_pos(d.uptime_percent)
        ));
    }
    let base = y_pos(0.0);
    path.push_str(&format!(
        "L{:.2},{base:.2} L{:.2},{base:.2} Z",
        x_pos(points.len() - 1, points.len()),
        x_pos(0, points.len())
    ));
    path
}

fn line_points(points: &[ChartDatum]) -> String {
    points
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{:.2},{:.2}", x_pos(i, points.len()), y_pos(d.uptime_percent)))
        .collect::<Vec<_>>()
        .join(" ")
}
