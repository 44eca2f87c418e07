use std::ops::Deref;

mod delete;
mod login;
mod register;
mod set_role;
mod update;

pub use login::LoginInput;
pub use register::RegisterInput;
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
