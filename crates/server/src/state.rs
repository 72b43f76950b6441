use service::DataService;

/// Shared handler state: the data service over the configured store.
#[derive(Clone)]
pub struct ServerState {
    pub data: DataService,
}

impl ServerState {
    pub fn new(data: DataService) -> Self { Self { data } }
}
