// SPDX-License-Identifier: MPL-2.0
use pizza_mania::config::{self, Config};
use pizza_mania::content;
use pizza_mania::drawer::{Drawer, DrawerKey, DrawerSettings, DrawerState};
use pizza_mania::i18n::fluent::I18n;
use pizza_mania::marquee::{Marquee, MarqueeItem, MarqueeSettings, Phase};
use pizza_mania::scroll::{PageSections, ScrollResolver};
use pizza_mania::tween::{Call, Engine, Recorder, Target};
use std::time::Duration;
use tempfile::tempdir;

const STRIP: Target = Target::new("it.strip");

/// Counts resolved targets on top of a real section stack.
#[derive(Default)]
struct CountingResolver {
    sections: PageSections,
    requested: Vec<String>,
}

impl ScrollResolver for CountingResolver {
    fn scroll_to(&mut self, id: &str) -> bool {
        self.requested.push(id.to_string());
        self.sections.scroll_to(id)
    }
}

fn strip_items(widths: &[f32]) -> Vec<MarqueeItem> {
    widths
        .iter()
        .enumerate()
        .map(|(i, width)| MarqueeItem::new(format!("dish{i}.jpg"), format!("Dish {i}")).with_width(*width))
        .collect()
}

fn report_all(marquee: &mut Marquee, scheduler: &mut Recorder<Engine>) {
    let generation = marquee.generation();
    for index in 0..marquee.items().len() {
        marquee.image_loaded(generation, index, 400, 300, scheduler);
    }
}

fn step(drawer: &mut Drawer, scheduler: &mut Recorder<Engine>, millis: u64) {
    let dt = Duration::from_millis(millis);
    scheduler.advance(dt);
    drawer.tick(dt, scheduler);
}

#[test]
fn three_items_loop_over_half_the_strip() {
    let mut scheduler = Recorder::new(Engine::new());
    let settings = MarqueeSettings::default().with_speed(60.0);
    let gap = settings.gap;
    let mut marquee = Marquee::new(STRIP, strip_items(&[200.0, 300.0, 250.0]), settings);

    let requests = marquee.mount();
    assert_eq!(requests.len(), 3);
    report_all(&mut marquee, &mut scheduler);

    let width = 2.0 * (750.0 + 3.0 * gap);
    assert_eq!(marquee.phase(), Phase::Running);
    assert!((marquee.measured_width() - width).abs() < 1e-3);

    let (targets, props, options) = scheduler.animations().last().expect("loop started");
    assert_eq!(targets, &[STRIP]);
    let to = props.get(pizza_mania::tween::Property::X).expect("x tween");
    assert!((to + width / 2.0).abs() < 1e-3);
    assert!((options.duration - (width / 2.0) / 60.0).abs() < 1e-4);

    let run = marquee.run_state(&scheduler).expect("running");
    assert!((run.loop_offset - width / 2.0).abs() < 1e-3);
}

#[test]
fn arrow_right_twice_then_enter_navigates_and_closes() {
    let mut scheduler = Recorder::new(Engine::new());
    let mut resolver = CountingResolver {
        sections: pizza_mania::ui::sections::page_sections(),
        requested: Vec::new(),
    };
    let items = content::nav_items();
    assert_eq!(items.len(), 8);
    let expected_id = items[2].id;

    let mut drawer = Drawer::new(items, DrawerSettings::default());
    drawer.mount(&mut scheduler);
    drawer.open(&mut scheduler);
    step(&mut drawer, &mut scheduler, 3_000);
    assert_eq!(drawer.state(), DrawerState::Open);

    drawer.key(DrawerKey::ArrowRight, &mut scheduler, &mut resolver);
    drawer.key(DrawerKey::ArrowRight, &mut scheduler, &mut resolver);
    assert_eq!(drawer.selected_index(), 2);

    drawer.key(DrawerKey::Enter, &mut scheduler, &mut resolver);
    assert_eq!(resolver.requested, vec![expected_id.to_string()]);
    assert!(resolver.sections.take_pending().is_some());

    step(&mut drawer, &mut scheduler, 250);
    assert_eq!(drawer.state(), DrawerState::Open);
    step(&mut drawer, &mut scheduler, 60);
    assert_eq!(drawer.state(), DrawerState::Closing);

    step(&mut drawer, &mut scheduler, 3_000);
    assert_eq!(drawer.state(), DrawerState::Closed);
    assert_eq!(resolver.requested.len(), 1);
}

#[test]
fn double_toggle_while_opening_plays_one_transition() {
    let mut scheduler = Recorder::new(Engine::new());
    let mut drawer = Drawer::new(content::nav_items(), DrawerSettings::default());
    drawer.mount(&mut scheduler);
    scheduler.clear();

    drawer.toggle(&mut scheduler);
    let after_first = scheduler.animations().count();
    drawer.toggle(&mut scheduler);
    assert_eq!(scheduler.animations().count(), after_first);
    assert_eq!(drawer.state(), DrawerState::Opening);

    step(&mut drawer, &mut scheduler, 3_000);
    assert_eq!(drawer.state(), DrawerState::Open);
    assert!(scheduler.cancelled().is_empty());
}

#[test]
fn unmount_while_running_cancels_exactly_once() {
    let mut scheduler = Recorder::new(Engine::new());
    let mut marquee = Marquee::new(STRIP, strip_items(&[320.0, 320.0]), MarqueeSettings::default());
    marquee.mount();
    report_all(&mut marquee, &mut scheduler);
    assert_eq!(marquee.phase(), Phase::Running);
    let offset_before = marquee.offset(&scheduler);

    scheduler.clear();
    marquee.unmount(&mut scheduler);
    marquee.unmount(&mut scheduler);

    let cancels: Vec<_> = scheduler
        .calls()
        .iter()
        .filter(|call| matches!(call, Call::Cancel { .. }))
        .collect();
    assert_eq!(cancels.len(), 1);
    assert!(!scheduler.inner().has_active());

    // Late results and frames change nothing.
    let generation = marquee.generation();
    marquee.image_loaded(generation, 0, 400, 300, &mut scheduler);
    assert!(marquee.tick(Duration::from_secs(1), &mut scheduler).is_empty());
    scheduler.advance(Duration::from_secs(1));
    assert_eq!(marquee.phase(), Phase::Unmounted);
    assert_eq!(marquee.offset(&scheduler), offset_before);
}

#[test]
fn language_follows_the_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-home"), "Accueil");

    // The command line wins over the file.
    let english = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(english.tr("nav-home"), "Home");
}

#[test]
fn broken_config_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[marquee\nspeed = ")
        .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some("warning-config-load"));
}
