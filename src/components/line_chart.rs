use yew::prelude::*;

use super::savings::palette;
use crate::chart::{ChartGeometry, ChartKind};

#[derive(Properties, PartialEq)]
pub struct LineChartProps {
    pub kind: ChartKind,
}

/// Indexed series as an SVG line with a hover tooltip per year.
#[function_component(LineChart)]
pub fn line_chart(props: &LineChartProps) -> Html {
    let kind = props.kind;
    let hovered = use_state(|| None::<usize>);

    let points = kind.points();
    let geometry = ChartGeometry::new(kind, &points);
    let stroke = kind.stroke();

    let on_leave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    // Hover bands split the plot into one column per sample.
    let band_width = if points.len() > 1 {
        (geometry.right - geometry.left) / (points.len() - 1) as f64
    } else {
        geometry.right - geometry.left
    };

    let tooltip = (*hovered).and_then(|index| points.get(index).map(|p| (index, kind.tooltip(p))));

    html! {
        <div class="relative h-64 w-full bg-white p-2 rounded-lg border border-red-100">
            <svg viewBox={geometry.view_box()} class="w-full h-full" onmouseleave={on_leave}>
                { for geometry.ticks.iter().map(|tick| {
                    let y = geometry.y(*tick);
                    html! {
                        <g>
                            <line x1={geometry.left.to_string()} x2={geometry.right.to_string()} y1={y.to_string()} y2={y.to_string()} stroke="#fee2e2" stroke-dasharray="3 3" />
                            <text x={(geometry.left - 6.0).to_string()} y={(y + 4.0).to_string()} text-anchor="end" font-size="12" fill="#9ca3af">
                                { kind.tick_label(*tick) }
                            </text>
                        </g>
                    }
                }) }

                { for points.iter().enumerate().filter(|(i, _)| i % kind.label_stride() == 0).map(|(i, p)| html! {
                    <text x={geometry.x(i).to_string()} y={(geometry.bottom + 20.0).to_string()} text-anchor="middle" font-size="12" fill="#9ca3af">
                        { p.year }
                    </text>
                }) }

                <polyline points={geometry.polyline(&points)} fill="none" stroke={stroke} stroke-width="3" stroke-linejoin="round" stroke-linecap="round" />

                { if kind.shows_dots() {
                    html! {
                        <>
                            { for points.iter().enumerate().map(|(i, p)| html! {
                                <circle cx={geometry.x(i).to_string()} cy={geometry.y(p.indexed).to_string()} r="3" fill={stroke} />
                            }) }
                        </>
                    }
                } else { html! {} } }

                { if let Some((index, point)) = (*hovered).and_then(|i| points.get(i).map(|p| (i, p))) {
                    html! {
                        <circle cx={geometry.x(index).to_string()} cy={geometry.y(point.indexed).to_string()} r="6" fill={stroke} stroke="#fff" stroke-width="2" />
                    }
                } else { html! {} } }

                { for (0..points.len()).map(|i| {
                    let hovered = hovered.clone();
                    let onmouseenter = Callback::from(move |_: MouseEvent| hovered.set(Some(i)));
                    html! {
                        <rect
                            x={(geometry.x(i) - band_width / 2.0).to_string()}
                            y={geometry.top.to_string()}
                            width={band_width.to_string()}
                            height={(geometry.bottom - geometry.top).to_string()}
                            fill="transparent"
                            onmouseenter={onmouseenter}
                        />
                    }
                }) }
            </svg>

            { if let Some((index, content)) = tooltip {
                let left = geometry.x_percent(index).clamp(10.0, 70.0);
                html! {
                    <div class="absolute top-2 pointer-events-none bg-white p-3 border border-red-200 shadow-lg rounded-lg" style={format!("left: {:.1}%", left)}>
                        <p class="font-bold text-red-800 mb-1">{ content.heading }</p>
                        <p class={palette(kind).emphasis}>{ content.indexed_line }</p>
                        <p class="text-gray-600 text-sm">{ content.raw_line }</p>
                    </div>
                }
            } else { html! {} } }
        </div>
    }
}
