// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Several carousels on one page, each with its own state, plus viewport resizes.
//!
//! Run:
//! - `cargo run -p understory_carousel_demos --example carousel_multi`

use understory_carousel::carousel::Carousel;
use understory_carousel::config::{CarouselConfig, DeckLayout};
use understory_carousel::types::InputEvent;
use understory_carousel_demos::{SimPage, init_tracing};

fn main() {
    init_tracing();
    let mut pages = [
        SimPage::new("news"),
        SimPage::new("team"),
        SimPage::new("logo"),
    ];
    let layouts = [
        DeckLayout::new(4, 960.0)
            .with_controls(true, true)
            .with_label("news"),
        DeckLayout::new(2, 960.0)
            .with_controls(true, true)
            .with_label("team"),
        // A single slide: inert, both controls disabled.
        DeckLayout::new(1, 960.0)
            .with_controls(true, true)
            .with_label("logo"),
    ];
    let mut carousels = Carousel::mount_all(
        layouts.into_iter().zip(pages.iter_mut()),
        CarouselConfig::default(),
    )
    .unwrap();

    println!("== Mounted ==");
    for (carousel, page) in carousels.iter().zip(&pages) {
        println!("  {}", page.describe(carousel));
    }

    carousels[0].go_to(2, &mut pages[0]);
    carousels[1].go_next(&mut pages[1]);
    assert!(!carousels[2].go_next(&mut pages[2]));

    println!("== Navigated ==");
    for (carousel, page) in carousels.iter().zip(&pages) {
        println!("  {}", page.describe(carousel));
    }

    // The window shrinks: every carousel keeps its slide, nobody scrolls.
    let scrolls: Vec<usize> = pages.iter().map(|p| p.scrolls).collect();
    let resize = InputEvent::Resize {
        viewport_width: 600.0,
    };
    for (carousel, page) in carousels.iter_mut().zip(pages.iter_mut()) {
        carousel.handle(&resize, page);
    }
    println!("== Resized to 600px ==");
    for (carousel, page) in carousels.iter().zip(&pages) {
        println!("  {}", page.describe(carousel));
    }
    assert_eq!(carousels[0].current_index(), 2);
    assert_eq!(pages[0].offset, -1200.0);
    assert_eq!(pages[1].offset, -600.0);
    assert_eq!(pages[2].offset, 0.0);
    assert_eq!(scrolls, pages.iter().map(|p| p.scrolls).collect::<Vec<_>>());
}
