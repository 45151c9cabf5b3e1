pub mod core {
    pub mod command;
    pub mod race_timer;
    pub mod tick;
}

pub mod interfaces {
    pub mod gui_interface;
}

pub mod post {
    pub mod race_summary;
}

pub mod pre {
    pub mod read_timer_pars;
    pub mod timer_opts;
}
