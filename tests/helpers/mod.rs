//! Shared fixtures for integration tests.
//!
//! The fixture model is parsed once and shared across tests, following
//! the cached-host pattern used for expensive setup.

// Not every test binary uses every helper.
#![allow(dead_code)]

use once_cell::sync::Lazy;

use appdna::ModelHost;

/// A small but complete model: three data objects with forms, reports,
/// classified workflows, cross-object parameter sources, and user
/// stories.
pub const FIXTURE_JSON: &str = r#"{
  "appName": "DemoApp",
  "namespace": [
    {
      "name": "App",
      "object": [
        {
          "name": "Customer",
          "prop": [{"name": "code"}, {"name": "landCode"}],
          "objectWorkflow": [
            {
              "name": "CustomerAdd",
              "isPage": "true",
              "objectWorkflowParam": [
                {"name": "landCode", "sourceObjectName": "Land"}
              ],
              "objectWorkflowOutputVar": [
                {"name": "customerRef", "sourceObjectName": "Customer"}
              ]
            },
            {"name": "CustomerDetailInitReport"},
            {
              "name": "CustomerBatchSync",
              "isDynaFlow": "true",
              "objectWorkflowParam": [
                {"name": "invoiceRef", "fKObjectName": "Invoice"}
              ]
            },
            {
              "name": "CustomerSyncStep",
              "isDynaFlowTask": "true",
              "objectWorkflowOutputVar": [
                {"name": "landRef", "sourceObjectName": "Land"}
              ]
            }
          ],
          "report": [
            {
              "name": "CustomerInvoiceList",
              "targetChildObject": "Invoice",
              "reportColumn": [
                {"name": "invoiceTotal", "sourceObjectName": "Invoice"},
                {"name": "landName", "sourceObjectName": "Land"}
              ]
            }
          ]
        },
        {
          "name": "Invoice",
          "objectWorkflow": [
            {"name": "InvoiceUpdate", "isPage": "true"}
          ]
        },
        {
          "name": "Land",
          "lookupItem": [{"name": "US", "displayName": "United States"}]
        }
      ],
      "userStory": [
        {"storyNumber": "US-1", "storyText": "As a Manager, I want to view all Invoices"},
        {"storyNumber": "US-2", "storyText": "As a clerk, I want to add a customer"}
      ]
    }
  ]
}"#;

static FIXTURE_HOST: Lazy<ModelHost> = Lazy::new(|| {
    let mut host = ModelHost::new();
    host.load_str(FIXTURE_JSON).expect("fixture model parses");
    host
});

/// The shared fixture host.
pub fn fixture_host() -> &'static ModelHost {
    &FIXTURE_HOST
}

/// A fresh host loaded from the given JSON.
pub fn host_from(json: &str) -> ModelHost {
    let mut host = ModelHost::new();
    host.load_str(json).expect("test model parses");
    host
}
