use std::ops::Deref;

mod create;
mod delete;
mod update;

pub use create::CreateInput;
pub use update::UpdateInput;

#[derive(Clone)]
pub struct Command(pub akkor_shared::State);

impl Deref for Command {
    type Target = akkor_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Command {
    pub fn new(state: akkor_shared::State) -> Self {
        Self(state)
    }
}
