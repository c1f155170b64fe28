// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Trackpad swipes through the wheel debouncer.
//!
//! One physical swipe produces dozens of wheel events but advances one slide. A
//! second swipe inside the cooldown window is swallowed; one after it goes through.
//! Mostly-vertical scrolling is left to the page.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_wheel`

use core::time::Duration;

use kurbo::Vec2;
use understory_carousel::carousel::Carousel;
use understory_carousel::config::{CarouselConfig, DeckLayout};
use understory_carousel::types::InputEvent;
use understory_carousel_demos::{SimPage, init_tracing};

/// A swipe of `events` wheel events, `dt` apart.
fn swipe(carousel: &mut Carousel, page: &mut SimPage, dx: f64, events: usize, dt: Duration) {
    let mut suppressed = 0;
    for _ in 0..events {
        let ev = InputEvent::Wheel {
            delta: Vec2::new(dx, 0.5),
        };
        if carousel.handle(&ev, page).prevents_default() {
            suppressed += 1;
        }
        page.sleep(carousel, dt);
    }
    println!("  {events} events, {suppressed} suppressed -> {}", page.describe(carousel));
}

fn main() {
    init_tracing();
    let mut page = SimPage::new("gallery");
    let layout = DeckLayout::new(5, 1280.0).with_controls(true, true);
    let mut carousel = Carousel::mount(layout, CarouselConfig::default(), &mut page).unwrap();
    let frame = Duration::from_millis(16);

    println!("== Swipe left ==");
    swipe(&mut carousel, &mut page, 9.0, 20, frame);
    assert_eq!(carousel.current_index(), 1);

    println!("== Second swipe inside cooldown ==");
    swipe(&mut carousel, &mut page, 9.0, 20, frame);
    assert_eq!(carousel.current_index(), 1);

    println!("== Pause, then swipe again ==");
    page.sleep(&mut carousel, Duration::from_millis(800));
    swipe(&mut carousel, &mut page, 9.0, 20, frame);
    assert_eq!(carousel.current_index(), 2);

    println!("== Vertical scroll passes through ==");
    page.sleep(&mut carousel, Duration::from_secs(1));
    let ev = InputEvent::Wheel {
        delta: Vec2::new(40.0, 60.0),
    };
    let disposition = carousel.handle(&ev, &mut page);
    println!("  disposition: {disposition:?}");
    assert!(disposition.is_empty());
    assert_eq!(carousel.current_index(), 2);

    println!("== Swipe right ==");
    swipe(&mut carousel, &mut page, -30.0, 6, frame);
    assert_eq!(carousel.current_index(), 1);
    assert_eq!(page.scrolls, 0);
}
