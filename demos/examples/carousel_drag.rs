// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag, touch, and button navigation on a three-slide carousel.
//!
//! Shows that moves only change state while the frame loop paints, that a short drag
//! snaps back, and that controls disable themselves at the bounds.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_drag`

use kurbo::Point;
use understory_carousel::carousel::Carousel;
use understory_carousel::config::{CarouselConfig, DeckLayout};
use understory_carousel::track::Controls;
use understory_carousel::types::{Control, InputEvent, PointerPhase, TouchPhase};
use understory_carousel_demos::{SimPage, init_tracing};

fn mouse(carousel: &mut Carousel, page: &mut SimPage, phase: PointerPhase, x: f64) {
    let ev = InputEvent::Pointer {
        phase,
        slide: carousel.current_index(),
        page: Point::new(x, 300.0),
    };
    carousel.handle(&ev, page);
}

fn main() {
    init_tracing();
    let mut page = SimPage::new("hero");
    let layout = DeckLayout::new(3, 1024.0).with_controls(true, true);
    let mut carousel = Carousel::mount(layout, CarouselConfig::default(), &mut page).unwrap();
    println!("== Mounted ==\n  {}", page.describe(&carousel));

    // Drag left 200px, painting a frame after each move.
    mouse(&mut carousel, &mut page, PointerPhase::Down, 700.0);
    for x in [650.0, 600.0, 550.0, 500.0] {
        mouse(&mut carousel, &mut page, PointerPhase::Move, x);
        page.frame(&mut carousel);
        println!("  {}", page.describe(&carousel));
    }
    mouse(&mut carousel, &mut page, PointerPhase::Up, 500.0);
    println!("== Released past threshold ==\n  {}", page.describe(&carousel));
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(page.offset, -1024.0);
    assert_eq!(page.frames_painted, 4);

    // A 30px nudge snaps back.
    mouse(&mut carousel, &mut page, PointerPhase::Down, 400.0);
    mouse(&mut carousel, &mut page, PointerPhase::Move, 430.0);
    mouse(&mut carousel, &mut page, PointerPhase::Up, 430.0);
    println!("== Short drag snapped back ==\n  {}", page.describe(&carousel));
    assert_eq!(carousel.current_index(), 1);

    // Touch swipe to the last slide; touch releases never scroll the page.
    let scrolls = page.scrolls;
    let start = [Point::new(900.0, 120.0)];
    let moved = [Point::new(600.0, 130.0)];
    for (phase, touches) in [
        (TouchPhase::Start, &start[..]),
        (TouchPhase::Move, &moved[..]),
        (TouchPhase::End, &[][..]),
    ] {
        carousel.handle(
            &InputEvent::Touch {
                phase,
                slide: 1,
                touches,
            },
            &mut page,
        );
    }
    println!("== Touch swipe ==\n  {}", page.describe(&carousel));
    assert_eq!(carousel.current_index(), 2);
    assert_eq!(page.scrolls, scrolls);
    assert_eq!(page.controls, Controls::PREV_ENABLED);

    // Next is a no-op at the end; prev walks back.
    carousel.handle(&InputEvent::Control(Control::Next), &mut page);
    carousel.handle(&InputEvent::Control(Control::Prev), &mut page);
    println!("== Buttons ==\n  {}", page.describe(&carousel));
    assert_eq!(carousel.current_index(), 1);
}
