use kafka_acl::acl::KafkaAcl;
use kafka_acl::client::{InstaclustrApiClient, KafkaAclApiClient};
use kafka_acl::connection_settings::ConnectionSettings;
use std::time::Duration;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bob_reads_orders() -> KafkaAcl {
    KafkaAcl::new("User:bob", "*", "Topic", "orders", "Read", "Allow", "LITERAL")
}

fn client_for(server: &MockServer) -> Result<InstaclustrApiClient, anyhow::Error> {
    let settings = ConnectionSettings {
        api_hostname: format!("{}/", server.uri()),
        username: "ops".to_owned(),
        api_key: "secret".to_owned(),
        request_timeout: Duration::from_secs(5),
    };

    InstaclustrApiClient::create(&settings)
}

#[tokio::test]
async fn reads_cluster_status() -> Result<(), anyhow::Error> {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/provisioning/v1/c1"))
        .and(basic_auth("ops", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "c1",
            "clusterName": "payments",
            "clusterStatus": "RUNNING",
            "dataCentres": [],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cluster = client_for(&server)?.read_cluster("c1").await?;

    assert!(cluster.is_running());
    assert_eq!(cluster.cluster_name, "payments");
    Ok(())
}

#[tokio::test]
async fn searches_acls_with_exact_filter() -> Result<(), anyhow::Error> {
    let server = MockServer::start().await;
    let acl = bob_reads_orders();
    Mock::given(method("POST"))
        .and(path("/provisioning/v1/c1/kafka/acls/searches"))
        .and(body_json(&acl))
        .respond_with(ResponseTemplate::new(200).set_body_json(vec![acl.clone()]))
        .expect(1)
        .mount(&server)
        .await;

    let acls = client_for(&server)?.read_kafka_acls("c1", &acl).await?;

    assert_eq!(acls, vec![acl]);
    Ok(())
}

#[tokio::test]
async fn creates_acl() -> Result<(), anyhow::Error> {
    let server = MockServer::start().await;
    let acl = bob_reads_orders();
    Mock::given(method("POST"))
        .and(path("/provisioning/v1/c1/kafka/acls"))
        .and(basic_auth("ops", "secret"))
        .and(body_json(&acl))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)?.create_kafka_acl("c1", &acl).await?;
    Ok(())
}

#[tokio::test]
async fn deletes_acl_with_body() -> Result<(), anyhow::Error> {
    let server = MockServer::start().await;
    let acl = bob_reads_orders();
    Mock::given(method("DELETE"))
        .and(path("/provisioning/v1/c1/kafka/acls"))
        .and(body_json(&acl))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)?.delete_kafka_acl("c1", &acl).await?;
    Ok(())
}

#[tokio::test]
async fn surfaces_status_and_body_of_failed_request() -> Result<(), anyhow::Error> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/provisioning/v1/c1/kafka/acls"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid principal"))
        .mount(&server)
        .await;

    let result = client_for(&server)?
        .create_kafka_acl("c1", &bob_reads_orders())
        .await;

    let error = format!("{:#}", result.expect_err("request with status 400 succeeded"));
    assert!(error.contains("400"), "{error}");
    assert!(error.contains("invalid principal"), "{error}");
    Ok(())
}

#[test]
fn rejects_empty_hostname() {
    let settings = ConnectionSettings {
        api_hostname: "/".to_owned(),
        username: "ops".to_owned(),
        api_key: "secret".to_owned(),
        request_timeout: Duration::from_secs(5),
    };

    assert!(InstaclustrApiClient::create(&settings).is_err());
}
