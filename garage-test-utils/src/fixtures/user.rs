use serde_json::{json, Value};

use crate::constant::TEST_GARAGE_ID;

/// User record with the given raw role string
pub fn with_role(role: &str) -> Value {
    json!({
        "id": 1,
        "nom": format!("Utilisateur {}", role),
        "email": format!("{}@garage.test", role),
        "role": role,
    })
}

pub fn admin() -> Value {
    with_role("admin")
}

pub fn client() -> Value {
    with_role("client")
}

pub fn garage() -> Value {
    with_role("garage")
}

/// Mechanic without a garage affiliation
pub fn mecanicien() -> Value {
    with_role("mecanicien")
}

/// Mechanic attached to a partner garage, shown the garage UI
pub fn affiliated_mecanicien() -> Value {
    let mut user = mecanicien();
    user["garage_id"] = json!(TEST_GARAGE_ID);
    user
}

/// Successful login payload for `user`, optionally inside a `data` envelope
pub fn auth_payload(token: &str, user: Value, wrapped: bool) -> Value {
    let payload = json!({ "token": token, "user": user });

    if wrapped {
        json!({ "success": true, "data": payload })
    } else {
        payload
    }
}
