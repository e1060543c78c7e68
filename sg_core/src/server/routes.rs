pub enum ApiPath {
    Static(&'static str),
}

impl ApiPath {
    pub fn as_str(&self) -> &str {
        match self {
            ApiPath::Static(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BackendApiGenerate {
    Text,
    Image,
    Video,
}

impl BackendApiGenerate {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiGenerate::Text => ApiPath::Static("/generate-text"),
            BackendApiGenerate::Image => ApiPath::Static("/generate-image"),
            BackendApiGenerate::Video => ApiPath::Static("/generate-video"),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum BackendApiHealth {
    Ping,
}

impl BackendApiHealth {
    pub fn path(&self) -> ApiPath {
        match self {
            BackendApiHealth::Ping => ApiPath::Static("/ping"),
        }
    }
}

/// Every route the backend serves, prefixed with `/api`.
pub fn all_backend_api_paths() -> Vec<String> {
    let mut paths = Vec::new();
    for generate in [
        BackendApiGenerate::Text,
        BackendApiGenerate::Image,
        BackendApiGenerate::Video,
    ] {
        paths.push(format!("/api{}", generate.path().as_str()));
    }
    for health in [BackendApiHealth::Ping] {
        paths.push(format!("/api{}", health.path().as_str()));
    }
    paths
}
