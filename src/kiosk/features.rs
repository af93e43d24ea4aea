use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub route: &'static str,
    /// False while the feature waits on an external integration.
    pub available: bool,
}

pub fn catalog() -> Vec<Feature> {
    vec![
        Feature {
            id: "diagnosis",
            title: "AI Diagnosis Assistant",
            description: "Get a preliminary AI-driven diagnosis based on your symptoms and vitals.",
            route: "/api/diagnosis",
            available: true,
        },
        Feature {
            id: "tele-consultation",
            title: "Tele-Consultation",
            description: "Summarise patient records for a remote consultation in the doctor's language.",
            route: "/api/tele-consultation",
            available: true,
        },
        Feature {
            id: "federated-learning",
            title: "Federated Learning",
            description: "Contribute to improving diagnostic models while ensuring data privacy.",
            route: "/api/federated-learning",
            available: true,
        },
        Feature {
            id: "facial-recognition",
            title: "Facial Recognition Check-in",
            description: "Streamline your check-in process with secure face ID recognition.",
            route: "/api/check-in",
            available: false,
        },
        Feature {
            id: "abdm-integration",
            title: "ABDM Integration",
            description: "Connect with the Ayushman Bharat Digital Mission ecosystem.",
            route: "/api/abdm/link",
            available: false,
        },
    ]
}
