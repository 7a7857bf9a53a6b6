//! One-line on-screen hint: wave progress while generating, the regenerate
//! key once idle.

use bevy::prelude::*;

use simulation::generation::GenerationState;

#[derive(Component)]
pub struct HudText;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(12.0),
            left: Val::Px(12.0),
            ..default()
        },
    ));
}

pub(crate) fn hud_message(state: &GenerationState) -> String {
    match state.progress() {
        Some((placed, total)) if state.in_progress => {
            format!("Generating... {placed}/{total} cells")
        }
        _ => "Press Space to regenerate".to_string(),
    }
}

pub fn update_hud(state: Res<GenerationState>, mut texts: Query<&mut Text, With<HudText>>) {
    if !state.is_changed() {
        return;
    }
    let message = hud_message(&state);
    for mut text in &mut texts {
        if text.0 != message {
            text.0.clone_from(&message);
        }
    }
}
