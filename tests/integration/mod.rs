mod test_jobs_from_env;
mod test_price_sources;
