//! Data layer — populates the fish registry at startup.
//!
//! This plugin runs in OnEnter(GameState::Loading), fills the FishRegistry
//! from the hard-coded design data in `fish.rs`, then transitions the game
//! into GameState::Playing. A host with its own fish data can skip this
//! plugin and insert a filled `FishRegistry` itself.

mod fish;

pub use fish::populate_fish;

use bevy::prelude::*;
use crate::shared::*;

pub struct DataPlugin;

impl Plugin for DataPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FishRegistry>()
            .add_systems(OnEnter(GameState::Loading), load_all_data);
    }
}

fn load_all_data(
    mut fish_registry: ResMut<FishRegistry>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    populate_fish(&mut fish_registry);
    info!("DataPlugin: fish loaded: {}", fish_registry.fish.len());

    next_state.set(GameState::Playing);
}
