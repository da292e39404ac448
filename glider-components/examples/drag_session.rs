//! Drives a synthetic pointer session through a horizontal slider core and
//! prints every response, so the state machine can be watched without a
//! window. Run with `RUST_LOG=trace` for per-event logging.

use glider_components::slider::{
    Horizontal, PositionerPolicy, ScrollMode, Slider, SliderArgs,
};
use glider_ui::{PointerButton, PointerEvent, Px, PxPosition, PxSize};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .init();

    let mut slider = Slider::new(
        Horizontal,
        SliderArgs::default()
            .item_count(10)
            .offset_before(Px::new(5))
            .offset_after(Px::new(5))
            .positioner(PositionerPolicy::Fixed(Px::new(20)))
            .jump_size(4),
    );
    let _ = slider.place(PxSize::new(Px::new(120), Px::new(14)));

    let session = [
        PointerEvent::Enter {
            position: at(60, 7),
        },
        PointerEvent::Press {
            button: PointerButton::Left,
            position: at(60, 7),
        },
        PointerEvent::Move {
            position: at(84, 7),
        },
        PointerEvent::Move {
            position: at(95, 7),
        },
        PointerEvent::Release {
            button: PointerButton::Left,
            position: at(95, 7),
        },
        PointerEvent::Leave,
    ];

    // Start in the middle so the drag has room in both directions.
    let _ = slider.set_position(5);

    for event in &session {
        let response = slider.handle_event(event);
        println!(
            "{event:?}\n  -> state {:?}, position {}, response {response:?}",
            slider.state(),
            slider.position(),
        );
    }

    let response = slider.scroll(ScrollMode::JumpBackwards);
    println!(
        "JumpBackwards -> position {}, response {response:?}",
        slider.position()
    );
    println!("render bindings: {:?}", slider.bindings());
}

fn at(x: i32, y: i32) -> PxPosition {
    PxPosition::new(Px::new(x), Px::new(y))
}
