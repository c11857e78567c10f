mod spammer_bootstrap;
mod spammer_run;
