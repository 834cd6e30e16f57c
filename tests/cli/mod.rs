mod service_errors_contract;
mod service_table_contract;
mod service_url_contract;
