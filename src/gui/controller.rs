use kiss3d::event::{Action, Key, WindowEvent};

// Key config, all in one place
const KEY_TOGGLE_RUN: Key = Key::Space;
const KEY_SPEED_UP: Key = Key::Period;
const KEY_SLOW_DOWN: Key = Key::Comma;
const KEY_COARSER_STEP: Key = Key::RBracket;
const KEY_FINER_STEP: Key = Key::LBracket;
const KEY_OPEN: Key = Key::O;
const KEY_SAVE: Key = Key::S;

const SPEED_INCREMENT: i32 = 10;

/// What the user asked for, independent of which key they pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ToggleRun,
    ChangeSpeed(i32),
    /// Multiply the time step by two (`true`) or divide it by two (`false`).
    ScaleTimeStep(bool),
    Open,
    Save,
}

pub fn command_for(event: &WindowEvent) -> Option<Command> {
    let key = match event {
        WindowEvent::Key(key, Action::Press, _) => *key,
        _ => return None,
    };

    let command = match key {
        KEY_TOGGLE_RUN => Command::ToggleRun,
        KEY_SPEED_UP => Command::ChangeSpeed(SPEED_INCREMENT),
        KEY_SLOW_DOWN => Command::ChangeSpeed(-SPEED_INCREMENT),
        KEY_COARSER_STEP => Command::ScaleTimeStep(true),
        KEY_FINER_STEP => Command::ScaleTimeStep(false),
        KEY_OPEN => Command::Open,
        KEY_SAVE => Command::Save,
        _ => return None,
    };
    Some(command)
}

pub fn help_text() -> &'static str {
    "Space: start/pause   , .: speed   [ ]: time step   O: open   S: save"
}
