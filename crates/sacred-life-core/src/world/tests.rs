use super::*;

fn lifecycle_config() -> SimConfig {
    SimConfig {
        gol_enabled: false,
        structures_enabled: true,
        lifecycle_enabled: true,
        ..SimConfig::default()
    }
}

fn make_world(config: &SimConfig) -> World {
    World::new(config).expect("config should be valid")
}

#[test]
fn new_rejects_invalid_config() {
    let config = SimConfig {
        width: 0,
        ..SimConfig::default()
    };
    assert!(matches!(
        World::new(&config),
        Err(SimConfigError::InvalidWidth)
    ));
}

#[test]
fn phases_alternate_and_generations_count_agent_phases() {
    let config = SimConfig::default();
    let mut world = make_world(&config);
    assert_eq!(world.phase(), TickPhase::Grid);
    world.step_phase(&config);
    assert_eq!(world.phase(), TickPhase::Agents);
    assert_eq!(world.generation(), 0);
    world.step_phase(&config);
    assert_eq!(world.phase(), TickPhase::Grid);
    assert_eq!(world.generation(), 1);
    world.tick(&config);
    assert_eq!(world.generation(), 2);
}

#[test]
fn empty_world_ticks_are_a_valid_steady_state() {
    let config = SimConfig {
        structures_enabled: true,
        lifecycle_enabled: true,
        color_supremacy_enabled: true,
        ..SimConfig::default()
    };
    let mut world = make_world(&config);
    for _ in 0..10 {
        world.tick(&config);
    }
    assert_eq!(world.generation(), 10);
    assert!(world.ants.is_empty());
}

#[test]
fn isolated_live_cell_dies_in_grid_phase() {
    // 3x3 toroidal grid, single live cell, no ants.
    let config = SimConfig {
        width: 3,
        height: 3,
        ..SimConfig::default()
    };
    let mut world = make_world(&config);
    world.grid.set_value(1, 1, 1);
    world.tick_phase_grid(&config);
    assert_eq!(world.grid.live_cells(), 0);
}

#[test]
fn ants_stay_in_bounds_for_many_ticks() {
    let config = SimConfig {
        width: 7,
        height: 5,
        gol_enabled: false,
        ..SimConfig::default()
    };
    let mut world = make_world(&config);
    for _ in 0..4 {
        world.add_random_ant(&config);
    }
    for _ in 0..200 {
        world.tick(&config);
        for ant in &world.ants {
            assert!(ant.x < 7 && ant.y < 5, "ant escaped to ({}, {})", ant.x, ant.y);
        }
    }
}

#[test]
fn fixed_seed_reproduces_the_whole_run() {
    let config = SimConfig {
        structures_enabled: true,
        lifecycle_enabled: true,
        max_fullness: 3,
        max_life_duration: 20,
        seed: 99,
        ..SimConfig::default()
    };
    let build = || {
        let mut world = make_world(&config);
        world.randomize(0.3);
        for _ in 0..5 {
            world.add_random_ant(&config);
        }
        for _ in 0..15 {
            world.tick(&config);
        }
        world
    };
    let a = build();
    let b = build();
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.ants, b.ants);
    assert_eq!(a.generation(), b.generation());
}

#[test]
fn feeding_increments_fullness_exactly_once() {
    let config = lifecycle_config();
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    world.grid.set_value(2, 2, 1);
    world.tick(&config);
    assert_eq!(world.ants.len(), 1);
    assert_eq!(world.ants[0].fullness, 2);
}

#[test]
fn feeding_requires_the_lifecycle_gate() {
    // Lifecycle without structures is inert: no aging, no feeding.
    let config = SimConfig {
        gol_enabled: false,
        structures_enabled: false,
        lifecycle_enabled: true,
        max_life_duration: 1,
        ..SimConfig::default()
    };
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    world.grid.set_value(2, 2, 1);
    world.tick(&config);
    assert_eq!(world.ants.len(), 1, "aging must not run without structures");
    assert_eq!(world.ants[0].fullness, 1);
    assert_eq!(world.ants[0].life_duration, 1);
}

#[test]
fn reproduction_consumes_the_parent_and_conserves_population() {
    let config = SimConfig {
        max_fullness: 3,
        mutation_rate: 0.0,
        ..lifecycle_config()
    };
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    let parent_id = world.ants[0].id.clone();
    let parent_color = world.ants[0].color;
    world.ants[0].fullness = 2; // one feeding away from the threshold
    world.grid.set_value(2, 2, 1);

    world.tick(&config);

    assert!(
        world.ants.iter().all(|a| a.id != parent_id),
        "reproduction is fatal to the parent"
    );
    let offspring = world.ants.len();
    assert!(
        (1..=2).contains(&offspring),
        "expected 1 or 2 offspring, got {offspring}"
    );
    for ant in &world.ants {
        assert_eq!(ant.fullness, 1);
        assert_eq!(ant.life_duration, config.max_life_duration);
        assert!(ant.owned_cells.is_empty());
        assert_eq!(ant.color, parent_color);
    }
}

#[test]
fn offspring_inherit_color_when_mutation_is_disabled() {
    let config = SimConfig {
        max_fullness: 2,
        mutation_rate: 0.0,
        seed: 7,
        ..lifecycle_config()
    };
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    let lineage = world.ants[0].color;
    // Keep the colony feeding and reproducing for a while.
    for _ in 0..10 {
        for ant_idx in 0..world.ants.len() {
            let (x, y) = (world.ants[ant_idx].x, world.ants[ant_idx].y);
            world.grid.set_value(x, y, 1);
        }
        world.tick(&config);
        for ant in &world.ants {
            assert_eq!(ant.color, lineage);
        }
    }
}

#[test]
fn conflict_eliminates_the_less_full_ant() {
    let config = lifecycle_config();
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    world.add_ant(3, 3, Direction::South, &config);
    world.ants[0].fullness = 3;
    world.ants[1].fullness = 5;
    let fuller_id = world.ants[1].id.clone();

    world.tick(&config);

    assert_eq!(world.ants.len(), 1);
    assert_eq!(world.ants[0].id, fuller_id, "fullness 3 always loses to 5");
}

#[test]
fn equal_fullness_conflict_is_seed_reproducible() {
    let config = SimConfig {
        seed: 1234,
        ..lifecycle_config()
    };
    let run = || {
        let mut world = make_world(&config);
        world.add_ant(2, 2, Direction::North, &config);
        world.add_ant(3, 3, Direction::South, &config);
        world.ants[0].fullness = 5;
        world.ants[1].fullness = 5;
        world.tick(&config);
        assert_eq!(world.ants.len(), 1);
        world.ants[0].id.clone()
    };
    assert_eq!(run(), run(), "same seed, same coin flip");
}

#[test]
fn distant_or_same_color_ants_do_not_fight() {
    let config = lifecycle_config();
    let mut world = make_world(&config);
    world.add_ant(0, 0, Direction::North, &config);
    world.add_ant(10, 10, Direction::North, &config);
    world.tick(&config);
    assert_eq!(world.ants.len(), 2, "distance 10 is no conflict");

    let shared = world.ants[0].color;
    world.ants[1].color = shared;
    world.ants[0].x = 5;
    world.ants[0].y = 5;
    world.ants[1].x = 5;
    world.ants[1].y = 6;
    world.tick(&config);
    assert_eq!(world.ants.len(), 2, "same color never fights");
}

#[test]
fn death_by_age_releases_owned_structure() {
    let config = SimConfig {
        max_life_duration: 2,
        ..lifecycle_config()
    };
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    let color = world.ants[0].color;

    // Tick 1: the ant deposits structure at (2,2) and records ownership.
    world.tick(&config);
    assert_eq!(world.ants.len(), 1);
    assert_eq!(world.grid.cell(2, 2).color, Some(color));
    assert!(world.ants[0].owned_cells.contains(&(2, 2)));

    // Tick 2: life duration hits zero before movement; the release scan
    // strips the color from the grid.
    world.tick(&config);
    assert!(world.ants.is_empty());
    assert_eq!(world.grid.cell(2, 2).color, None);
    assert_eq!(world.grid.cell(2, 2).solidity, 0);
}

#[test]
fn surviving_sibling_keeps_collective_structure_under_supremacy() {
    let config = SimConfig {
        color_supremacy_enabled: true,
        max_life_duration: 100,
        ..lifecycle_config()
    };
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    world.add_ant(20, 20, Direction::North, &config);
    let shared = world.ants[0].color;
    world.ants[1].color = shared;
    world.ants[0].life_duration = 1; // dies during the next aging pass
    world.grid.set(0, 0, 1, Some(shared), 5);
    world.ants[0].owned_cells.insert((0, 0));

    world.tick(&config);

    assert_eq!(world.ants.len(), 1);
    assert_eq!(
        world.grid.cell(0, 0).color,
        Some(shared),
        "sibling claim keeps the structure"
    );
    assert_eq!(world.grid.cell(0, 0).solidity, 4, "one decay, no release");
}

#[test]
fn without_supremacy_release_ignores_siblings() {
    let config = SimConfig {
        max_life_duration: 100,
        ..lifecycle_config()
    };
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    world.add_ant(20, 20, Direction::North, &config);
    let shared = world.ants[0].color;
    world.ants[1].color = shared;
    world.ants[0].life_duration = 1;
    world.grid.set(0, 0, 1, Some(shared), 5);
    world.ants[0].owned_cells.insert((0, 0));

    world.tick(&config);

    assert_eq!(world.ants.len(), 1);
    assert_eq!(world.grid.cell(0, 0).color, None);
    assert_eq!(world.grid.cell(0, 0).solidity, 0);
}

#[test]
fn supremacy_leaves_no_orphan_colors_after_any_tick() {
    let config = SimConfig {
        width: 25,
        height: 25,
        color_supremacy_enabled: true,
        max_fullness: 3,
        max_life_duration: 6,
        seed: 5,
        ..lifecycle_config()
    };
    let mut world = make_world(&config);
    world.randomize(0.4);
    for _ in 0..6 {
        world.add_random_ant(&config);
    }
    for _ in 0..25 {
        world.tick(&config);
        let living: std::collections::HashSet<_> = world.ants.iter().map(|a| a.color).collect();
        for cell in world.grid.cells() {
            if let Some(color) = cell.color {
                assert!(
                    living.contains(&color),
                    "cell color {color:?} has no living ant"
                );
            }
        }
    }
}

#[test]
fn population_can_die_out_and_the_world_keeps_ticking() {
    let config = SimConfig {
        max_life_duration: 3,
        ..lifecycle_config()
    };
    let mut world = make_world(&config);
    world.add_ant(1, 1, Direction::East, &config);
    for _ in 0..10 {
        world.tick(&config);
    }
    assert!(world.ants.is_empty());
    assert_eq!(world.generation(), 10);
}

#[test]
fn deposited_structure_decays_across_ticks() {
    let config = SimConfig {
        gol_enabled: false,
        structures_enabled: true,
        structure_lifetime: 3,
        ..SimConfig::default()
    };
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    world.tick(&config); // deposit at solidity 3
    assert_eq!(world.grid.cell(2, 2).solidity, 3);
    world.tick(&config);
    assert_eq!(world.grid.cell(2, 2).solidity, 2);
    world.tick(&config);
    assert_eq!(world.grid.cell(2, 2).solidity, 1);
    let color_before_last = world.grid.cell(2, 2).color;
    assert!(color_before_last.is_some(), "still colored one tick from zero");
    world.tick(&config);
    assert_eq!(world.grid.cell(2, 2).solidity, 0);
    assert_eq!(world.grid.cell(2, 2).color, None);
}

#[test]
fn resize_preserves_overlap_and_drops_outside_ants() {
    let config = SimConfig {
        gol_enabled: false,
        ..SimConfig::default()
    };
    let mut world = make_world(&config);
    world.grid.set_value(1, 1, 1);
    world.grid.set_value(4, 4, 1);
    world.add_ant(1, 1, Direction::North, &config);
    world.add_ant(4, 4, Direction::North, &config);

    world.resize(3, 3);

    assert_eq!(world.grid.width(), 3);
    assert_eq!(world.grid.height(), 3);
    assert_eq!(world.grid.cell(1, 1).value, 1);
    assert_eq!(world.ants.len(), 1);
    assert_eq!((world.ants[0].x, world.ants[0].y), (1, 1));
}

#[test]
fn clear_resets_population_and_generation() {
    let config = SimConfig::default();
    let mut world = make_world(&config);
    world.add_ant(2, 2, Direction::North, &config);
    world.grid.set_value(1, 1, 1);
    world.tick(&config);
    world.clear();
    assert!(world.ants.is_empty());
    assert_eq!(world.grid.live_cells(), 0);
    assert_eq!(world.generation(), 0);
    assert_eq!(world.phase(), TickPhase::Grid);
}

#[test]
fn add_ant_assigns_distinct_ids_and_colors() {
    let config = SimConfig::default();
    let mut world = make_world(&config);
    world.add_ant(0, 0, Direction::North, &config);
    world.add_ant(1, 0, Direction::North, &config);
    assert_ne!(world.ants[0].id, world.ants[1].id);
    assert_ne!(world.ants[0].color, world.ants[1].color);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn add_ant_panics_outside_the_grid() {
    let config = SimConfig::default();
    let mut world = make_world(&config);
    world.add_ant(50, 50, Direction::North, &config);
}
