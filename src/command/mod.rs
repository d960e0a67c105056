mod command;
mod experiment_add_command;
mod experiment_command;
mod experiment_list_command;
mod experiment_remove_command;
mod experiment_show_command;
mod input_args;
mod plot_command;
mod report_command;

pub use command::*;
