use std::f64::consts::PI;

use shared::geometry::{label_angle_radians, sector_span_radians};
use shared::{Lot, MainColors};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 450;
const MAX_LABEL_CHARS: usize = 14;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub lots: Vec<Lot>,
    pub colors: MainColors,
    pub rotation: f64,
    #[prop_or_default]
    pub is_spinning: bool,
    #[prop_or_default]
    pub logo_url: Option<String>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn short_label(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL_CHARS {
        name.to_string()
    } else {
        let head: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", head)
    }
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    size: f64,
    lots: &[Lot],
    colors: &MainColors,
    rotation: f64,
    is_spinning: bool,
    logo: Option<&HtmlImageElement>,
) {
    let center = size / 2.0;
    let radius = center - 20.0;
    let sectors = lots.len().max(1);

    context.clear_rect(0.0, 0.0, size, size);

    // Outer glow
    context.begin_path();
    let glow = if is_spinning { 0.25 } else { 0.15 };
    context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow));
    let _ = context.arc(center, center, radius + 15.0, 0.0, 2.0 * PI);
    context.fill();

    for index in 0..sectors {
        let (start, end) = sector_span_radians(index, sectors, rotation);
        context.begin_path();
        context.set_fill_style_str(colors.sector_color(index));
        context.move_to(center, center);
        let _ = context.arc(center, center, radius, start, end);
        context.close_path();
        context.fill();

        context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
        context.set_line_width(2.5);
        context.stroke();
    }

    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_font("bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(3.0);

    for (index, lot) in lots.iter().enumerate() {
        if lot.name.is_empty() {
            continue;
        }
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(label_angle_radians(index, sectors, rotation));
        let _ = context.translate(radius * 0.6, 0.0);
        let _ = context.fill_text(&short_label(&lot.name), 0.0, 0.0);
        context.restore();
    }

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);

    // Hub, with the business logo once it has loaded
    let hub_radius = radius * 0.22;
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    let _ = context.arc(center, center, hub_radius, 0.0, 2.0 * PI);
    context.fill();

    if let Some(logo) = logo {
        if logo.complete() && logo.natural_width() > 0 {
            context.save();
            context.begin_path();
            let _ = context.arc(center, center, hub_radius - 4.0, 0.0, 2.0 * PI);
            context.clip();
            let side = (hub_radius - 4.0) * 2.0;
            let _ = context.draw_image_with_html_image_element_and_dw_and_dh(
                logo,
                center - side / 2.0,
                center - side / 2.0,
                side,
                side,
            );
            context.restore();
        }
    }

    // Fixed pointer at the top
    context.begin_path();
    context.move_to(center, center - radius + 18.0);
    context.line_to(center - 18.0, center - radius - 16.0);
    context.line_to(center + 18.0, center - radius - 16.0);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let logo = use_state(|| None::<HtmlImageElement>);

    // Load the logo once per URL; redraw when it arrives.
    {
        let logo = logo.clone();
        use_effect_with(props.logo_url.clone(), move |logo_url| {
            let mut onload_guard = None;
            match logo_url.as_deref().filter(|url| !url.is_empty()) {
                Some(url) => {
                    if let Ok(image) = HtmlImageElement::new() {
                        image.set_cross_origin(Some("anonymous"));
                        let loaded = image.clone();
                        let handle = logo.clone();
                        let onload = Closure::<dyn FnMut()>::new(move || {
                            handle.set(Some(loaded.clone()));
                        });
                        image.set_onload(Some(onload.as_ref().unchecked_ref()));
                        image.set_src(url);
                        onload_guard = Some((image, onload));
                    }
                }
                None => logo.set(None),
            }
            move || {
                if let Some((image, _onload)) = onload_guard {
                    image.set_onload(None);
                }
            }
        });
    }

    {
        let canvas_ref = canvas_ref.clone();
        let lots = props.lots.clone();
        let colors = props.colors.clone();
        let logo = (*logo).clone();
        use_effect_with(
            (props.rotation, props.is_spinning, lots, colors, logo),
            move |(rotation, is_spinning, lots, colors, logo)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Some(context) = context_2d(&canvas) {
                        draw_wheel(
                            &context,
                            canvas.width() as f64,
                            lots,
                            colors,
                            *rotation,
                            *is_spinning,
                            logo.as_ref(),
                        );
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

