mod tests_concurrency;
mod tests_default_accessibility;
mod tests_end_to_end;
mod tests_properties;
