use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoginMethod {
    #[default]
    #[serde(rename = "email")]
    Email,
    Google,
    Facebook,
}

impl LoginMethod {
    pub fn label(self) -> &'static str {
        match self {
            LoginMethod::Email => "Email",
            LoginMethod::Google => "Google",
            LoginMethod::Facebook => "Facebook",
        }
    }
}

/// The locally held student profile. Every field is required when read back
/// from durable storage; an empty string means "not filled in yet".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    #[serde(rename = "class")]
    pub class_level: String,
    pub board: String,
    pub stream: String,
    pub interests: Vec<String>,
    pub email: String,
    pub date_of_birth: String,
    pub education: String,
    pub location: String,
    pub mobile: String,
    pub phone_number: String,
    pub profile_picture: String,
    pub login_method: LoginMethod,
    pub is_logged_in: bool,
}

/// Field-by-field patch for [`UserProfile`]. Absent fields keep their current value.
///
/// `isLoggedIn` is deliberately not part of the patch: applying any update signs the user in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "class", skip_serializing_if = "Option::is_none")]
    pub class_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_method: Option<LoginMethod>,
}

impl ProfileUpdate {
    /// Shallow merge into `profile`, then mark it signed in.
    pub fn apply_to(self, profile: &mut UserProfile) {
        fn set<T>(slot: &mut T, value: Option<T>) {
            if let Some(v) = value {
                *slot = v;
            }
        }

        set(&mut profile.name, self.name);
        set(&mut profile.class_level, self.class_level);
        set(&mut profile.board, self.board);
        set(&mut profile.stream, self.stream);
        set(&mut profile.interests, self.interests);
        set(&mut profile.email, self.email);
        set(&mut profile.date_of_birth, self.date_of_birth);
        set(&mut profile.education, self.education);
        set(&mut profile.location, self.location);
        set(&mut profile.mobile, self.mobile);
        set(&mut profile.phone_number, self.phone_number);
        set(&mut profile.profile_picture, self.profile_picture);
        set(&mut profile.login_method, self.login_method);
        profile.is_logged_in = true;
    }
}
