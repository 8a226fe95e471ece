/// Integration tests exercising the store against real storage backends
mod sqlite_workflow;
mod analytics_scenarios;
