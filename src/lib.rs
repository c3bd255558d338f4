pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
    pub mod repository;
}

pub mod catalog {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod factory;
    #[cfg(test)]
    pub(crate) mod fixtures;
}

pub mod core {
    pub mod command;
    pub mod controller;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod gateway;

pub mod menu {
    pub mod cli;
}

pub mod utils {
    pub mod date;
    pub mod logging;
}
