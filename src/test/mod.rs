mod event;
mod sim_time;
