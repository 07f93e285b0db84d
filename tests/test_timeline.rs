//! Integration tests for section timelines and the player.
//!
//! Tests cover:
//! - Hero intro offsets built from relative positions
//! - The endless yoyo float, including after long uptime
//! - Position parsing
//! - Section animations and their registration on mount

mod common;

use folio::animation::{Player, Property};
use folio::page::Animation;
use pretty_assertions::assert_eq;

use common::*;

fn autoplay(section: Section, index: usize) -> Timeline {
    match section.animations(6).into_iter().nth(index) {
        Some(Animation::Autoplay(timeline)) => timeline,
        other => panic!("expected an autoplay timeline, got {other:?}"),
    }
}

fn start_of(timeline: &Timeline, target: &str) -> f32 {
    timeline
        .tweens()
        .iter()
        .find(|tween| tween.target.as_str() == target)
        .map(|tween| tween.offset)
        .unwrap_or_else(|| panic!("no tween for {target}"))
}

#[test]
fn test_hero_intro_overlaps_steps() -> anyhow::Result<()> {
    let intro = autoplay(Section::Hero, 0);

    // title lines 0.8s staggered 0.1 -> 0.9, then each step pulled back
    assert!(approx(start_of(&intro, "hero.title[1]"), 0.1));
    assert!(approx(start_of(&intro, "hero.subtitle"), 0.5));
    assert!(approx(start_of(&intro, "hero.description"), 0.8));
    assert!(approx(start_of(&intro, "hero.buttons"), 1.1));
    assert!(approx(start_of(&intro, "hero.social[0]"), 1.4));
    assert!(approx(start_of(&intro, "hero.social[3]"), 1.7));
    assert!(approx(intro.duration(), 2.1));

    // before anything plays every element sits at its start value
    let sheet = Player::new(intro).render();
    assert_eq!(sheet.of("hero.subtitle").opacity, 0.0);
    assert_eq!(sheet.of("hero.title[0]").y, 50.0);

    Ok(())
}

#[test]
fn test_float_yoyos_forever() -> anyhow::Result<()> {
    let float = autoplay(Section::Hero, 2);
    assert_eq!(float.repeat(), Repeat::Forever { yoyo: true });

    let mut player = Player::new(float);
    player.play();

    // 1. First pass moves down towards 10
    player.advance(2.0);
    assert!(approx(player.render().of("hero.float").y, 10.0));

    // 2. Second pass comes back up: 3s in is halfway back
    player.advance(1.0);
    assert!(approx(player.render().of("hero.float").y, 5.0));

    // 3. Never completes
    assert_eq!(player.advance(100.0), None);
    assert!(player.is_running());

    Ok(())
}

#[test]
fn test_float_keeps_moving_after_long_uptime() -> anyhow::Result<()> {
    let mut player = Player::new(autoplay(Section::Hero, 2));
    player.play();

    // 1. Run for about eleven days of wall time in one go
    player.advance(1_000_001.0);
    assert!(player.playhead() < 4.0);
    let before = player.render().of("hero.float").y;

    // 2. One second of 60 fps frames still moves the float
    for _ in 0..60 {
        player.advance(1.0 / 60.0);
    }
    let after = player.render().of("hero.float").y;
    assert!((after - before).abs() > 1.0, "float frozen at {before}");

    Ok(())
}

#[test]
fn test_reverse_returns_to_start() -> anyhow::Result<()> {
    let mut player = Player::new(fade_in("card"));
    player.play();
    player.advance(0.6);
    player.reverse();
    player.advance(0.2);
    assert!(approx(player.playhead(), 0.4));

    player.advance(1.0);
    assert_eq!(player.playhead(), 0.0);
    assert_eq!(player.direction(), Direction::Paused);
    assert_eq!(player.render().of("card").opacity, 0.0);

    Ok(())
}

#[test]
fn test_positions_parse() -> anyhow::Result<()> {
    assert_eq!("-=0.4".parse::<Position>()?, Position::Relative(-0.4));
    assert_eq!("+=1".parse::<Position>()?, Position::Relative(1.0));
    assert_eq!("1.5".parse::<Position>()?, Position::At(1.5));
    assert_eq!("".parse::<Position>()?, Position::Sequential);
    assert!("soon".parse::<Position>().is_err());

    Ok(())
}

#[test]
fn test_skill_bars_grow_from_zero() -> anyhow::Result<()> {
    let animations = Section::Skills.animations(6);
    let bars = animations
        .iter()
        .find_map(|animation| match animation {
            Animation::Scroll { timeline, .. }
                if timeline.targets().iter().any(|t| t.as_str() == "skills.bar[0]") =>
            {
                Some(timeline)
            }
            _ => None,
        })
        .expect("skills register a bar timeline");

    let widths: Vec<(f32, f32)> = bars
        .tweens()
        .iter()
        .filter(|tween| tween.property == Property::Width)
        .map(|tween| (tween.from, tween.to))
        .collect();
    assert_eq!(widths.len(), folio::content::SKILLS.len());
    assert!(widths.iter().all(|&(from, to)| from == 0.0 && to == 1.0));
    assert_eq!(bars.tweens()[0].ease, Ease::Power2Out);

    Ok(())
}

#[test]
fn test_every_section_registers_its_animations() -> anyhow::Result<()> {
    let page = mounted_page();

    for section in Section::ALL {
        let expected = section.animations(page.visible_projects().len()).len();
        assert_eq!(
            page.triggers().scope_len(section.name()),
            expected,
            "{section}"
        );
    }

    // The hero runs on its own as soon as it mounts
    assert!(page.triggers().is_animating());

    Ok(())
}

#[test]
fn test_hero_intro_plays_on_mount() -> anyhow::Result<()> {
    let mut page = mounted_page();
    assert_eq!(page.styles().of("hero.subtitle").opacity, 0.0);

    page.tick(3.0);
    let styles = page.styles();
    assert_eq!(styles.of("hero.subtitle").opacity, 1.0);
    assert_eq!(styles.of("nav.bar").y, 0.0);
    assert_eq!(styles.of("hero.portrait").scale, 1.0);

    Ok(())
}

#[test]
fn test_reduced_motion_page_settles_immediately() -> anyhow::Result<()> {
    let mut config = Config::default();
    config.animation.reduced_motion = true;
    let page = mounted_page_with(&config);

    let styles = page.styles();
    assert_eq!(styles.of("hero.subtitle").opacity, 1.0);
    assert_eq!(styles.of("nav.bar").opacity, 1.0);

    Ok(())
}
