use bevy::prelude::*;

use simulation::regeneration::RegenerateCity;

/// Key that requests a fresh city layout.
pub const REGENERATE_KEY: KeyCode = KeyCode::Space;

/// Space: ask the simulation for a new layout. Edge-triggered; holding the
/// key does not repeat. The simulation drops the request while a wave is
/// still running.
pub fn keyboard_regenerate(
    keys: Res<ButtonInput<KeyCode>>,
    mut requests: EventWriter<RegenerateCity>,
) {
    if keys.just_pressed(REGENERATE_KEY) {
        requests.send(RegenerateCity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::event::Events;

    fn app() -> App {
        let mut app = App::new();
        app.init_resource::<ButtonInput<KeyCode>>()
            .add_event::<RegenerateCity>()
            .add_systems(Update, keyboard_regenerate);
        app
    }

    fn sent(app: &App) -> usize {
        app.world().resource::<Events<RegenerateCity>>().len()
    }

    #[test]
    fn test_press_sends_one_request() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(REGENERATE_KEY);
        app.update();
        assert_eq!(sent(&app), 1);
    }

    #[test]
    fn test_held_key_does_not_repeat() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(REGENERATE_KEY);
        app.update();
        // Nothing clears just_pressed here, so do it by hand like the input
        // plugin would at the start of the next frame.
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        assert_eq!(sent(&app), 1);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut app = app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Enter);
        app.update();
        assert_eq!(sent(&app), 0);
    }
}
