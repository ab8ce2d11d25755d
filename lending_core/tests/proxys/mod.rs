pub mod proxy_lending_core;
