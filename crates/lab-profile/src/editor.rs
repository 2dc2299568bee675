use lab_auth::SessionStore;
use lab_core::CoreError;
use lab_core::entities::Profile;

use crate::collection::ResearchCollection;
use crate::error::ProfileError;
use crate::gateway::ProfileGateway;
use crate::tags;

/// The signed-in user's profile page.
///
/// Scalar fields and research interests change only in edit mode; the
/// research lists have their own staged-change protocol and are always
/// editable. `email` comes from the session and cannot be changed.
#[derive(Debug, Clone)]
pub struct ProfileEditor {
    token: String,
    name: String,
    email: String,
    affiliation: String,
    position: String,
    research_interests: Vec<String>,
    profile_image: Option<String>,
    research: ResearchCollection,
    is_editing: bool,
    last_error: Option<String>,
}

impl ProfileEditor {
    /// Start from an empty profile for the session user.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Auth` if nobody is signed in.
    pub fn open(session: &SessionStore) -> Result<Self, ProfileError> {
        let user = session.require_authenticated()?;
        Self::from_profile(session, Profile::for_user(&user.name, &user.email))
    }

    /// Start from an existing profile. The email is always taken from the
    /// session, whatever `profile` says.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError::Auth` if nobody is signed in.
    pub fn from_profile(session: &SessionStore, profile: Profile) -> Result<Self, ProfileError> {
        let user = session.require_authenticated()?;
        let token = session
            .state()
            .token
            .clone()
            .unwrap_or_else(|| user.token.clone());
        let research =
            ResearchCollection::from_lists(profile.ongoing_research, profile.past_research)?;

        Ok(Self {
            token,
            name: profile.name,
            email: user.email.clone(),
            affiliation: profile.affiliation,
            position: profile.position,
            research_interests: profile.research_interests,
            profile_image: profile.profile_image,
            research,
            is_editing: false,
            last_error: None,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn affiliation(&self) -> &str {
        &self.affiliation
    }

    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }

    #[must_use]
    pub fn research_interests(&self) -> &[String] {
        &self.research_interests
    }

    #[must_use]
    pub fn profile_image(&self) -> Option<&str> {
        self.profile_image.as_deref()
    }

    #[must_use]
    pub const fn research(&self) -> &ResearchCollection {
        &self.research
    }

    pub const fn research_mut(&mut self) -> &mut ResearchCollection {
        &mut self.research
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Message from the last failed save, until the next successful one.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub const fn begin_editing(&mut self) {
        self.is_editing = true;
    }

    /// Set the display name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` outside edit mode.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CoreError> {
        self.ensure_editing()?;
        self.name = name.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` outside edit mode.
    pub fn set_affiliation(&mut self, affiliation: impl Into<String>) -> Result<(), CoreError> {
        self.ensure_editing()?;
        self.affiliation = affiliation.into();
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` outside edit mode.
    pub fn set_position(&mut self, position: impl Into<String>) -> Result<(), CoreError> {
        self.ensure_editing()?;
        self.position = position.into();
        Ok(())
    }

    /// Replace or clear the profile image reference.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` outside edit mode.
    pub fn set_profile_image(&mut self, image: Option<String>) -> Result<(), CoreError> {
        self.ensure_editing()?;
        self.profile_image = image;
        Ok(())
    }

    /// Append an empty interest slot.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` outside edit mode.
    pub fn add_interest(&mut self) -> Result<(), CoreError> {
        self.ensure_editing()?;
        tags::push_empty(&mut self.research_interests);
        Ok(())
    }

    /// Returns `Ok(false)` if `index` is out of range.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` outside edit mode.
    pub fn update_interest(
        &mut self,
        index: usize,
        value: impl Into<String>,
    ) -> Result<bool, CoreError> {
        self.ensure_editing()?;
        Ok(tags::update(&mut self.research_interests, index, value))
    }

    /// Returns `Ok(false)` if `index` is out of range.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidState` outside edit mode.
    pub fn remove_interest(&mut self, index: usize) -> Result<bool, CoreError> {
        self.ensure_editing()?;
        Ok(tags::remove(&mut self.research_interests, index))
    }

    /// Snapshot of the profile as it would be saved.
    #[must_use]
    pub fn to_profile(&self) -> Profile {
        let (ongoing_research, past_research) = self.research.to_lists();
        Profile {
            name: self.name.clone(),
            email: self.email.clone(),
            affiliation: self.affiliation.clone(),
            position: self.position.clone(),
            research_interests: self.research_interests.clone(),
            profile_image: self.profile_image.clone(),
            ongoing_research,
            past_research,
        }
    }

    /// Send the profile to `gateway` with the session token.
    ///
    /// On success edit mode ends. On failure nothing changes except
    /// [`Self::last_error`].
    ///
    /// # Errors
    ///
    /// - `ProfileError::Core` if a research item has an empty title; nothing
    ///   is sent.
    /// - `ProfileError::SaveFailed` if the gateway reports an error.
    pub async fn save<G: ProfileGateway>(&mut self, gateway: &G) -> Result<(), ProfileError> {
        let profile = self.to_profile();
        profile.validate()?;

        match gateway.save_profile(&self.token, &profile).await {
            Ok(()) => {
                tracing::info!(email = %self.email, "profile saved");
                self.is_editing = false;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "profile save failed");
                self.last_error = Some(e.to_string());
                Err(ProfileError::SaveFailed(e))
            }
        }
    }

    fn ensure_editing(&self) -> Result<(), CoreError> {
        if self.is_editing {
            Ok(())
        } else {
            Err(CoreError::InvalidState("profile is not in edit mode".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use lab_auth::{CredentialDirectory, MemoryStorage};
    use lab_client::ClientError;
    use lab_core::entities::ResearchItem;
    use lab_core::enums::ResearchList;
    use pretty_assertions::assert_eq;

    use super::*;

    /// Records every call and answers with a fixed status.
    #[derive(Default)]
    struct FakeGateway {
        fail_with: Option<u16>,
        calls: Mutex<Vec<(String, Profile)>>,
    }

    impl ProfileGateway for FakeGateway {
        async fn save_profile(&self, token: &str, profile: &Profile) -> Result<(), ClientError> {
            self.calls
                .lock()
                .unwrap()
                .push((token.to_string(), profile.clone()));
            match self.fail_with {
                Some(status) => Err(ClientError::Api {
                    status,
                    message: "boom".into(),
                }),
                None => Ok(()),
            }
        }
    }

    async fn signed_in() -> SessionStore {
        let mut store = SessionStore::open(
            CredentialDirectory::default(),
            Arc::new(MemoryStorage::new()),
            "editor-test",
        );
        store.login("test@example.com", "password123").await.unwrap();
        store
    }

    #[test]
    fn open_requires_a_session() {
        let store = SessionStore::open(
            CredentialDirectory::default(),
            Arc::new(MemoryStorage::new()),
            "editor-test",
        );
        assert!(matches!(
            ProfileEditor::open(&store),
            Err(ProfileError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn open_seeds_identity_from_session() {
        let store = signed_in().await;
        let editor = ProfileEditor::open(&store).unwrap();
        assert_eq!(editor.name(), "Test User");
        assert_eq!(editor.email(), "test@example.com");
        assert!(!editor.is_editing());
        assert!(editor.research().items(ResearchList::Ongoing).is_empty());
    }

    #[tokio::test]
    async fn fields_are_locked_outside_edit_mode() {
        let store = signed_in().await;
        let mut editor = ProfileEditor::open(&store).unwrap();
        assert!(matches!(
            editor.set_affiliation("KAIST"),
            Err(CoreError::InvalidState(_))
        ));
        assert!(editor.add_interest().is_err());

        editor.begin_editing();
        editor.set_affiliation("KAIST").unwrap();
        editor.add_interest().unwrap();
        assert!(editor.update_interest(0, "Genomics").unwrap());
        assert!(!editor.remove_interest(4).unwrap());
        assert_eq!(editor.affiliation(), "KAIST");
        assert_eq!(editor.research_interests(), ["Genomics"]);
    }

    #[tokio::test]
    async fn save_sends_token_and_leaves_edit_mode() {
        let store = signed_in().await;
        let mut editor = ProfileEditor::open(&store).unwrap();
        editor.begin_editing();
        editor.set_position("PhD student").unwrap();
        editor
            .research_mut()
            .add(ResearchList::Ongoing, ResearchItem::new("Organoids"))
            .unwrap();

        let gateway = FakeGateway::default();
        editor.save(&gateway).await.unwrap();

        assert!(!editor.is_editing());
        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "mock-jwt-token");
        assert_eq!(calls[0].1.position, "PhD student");
        assert_eq!(calls[0].1.ongoing_research[0].title, "Organoids");
    }

    #[tokio::test]
    async fn failed_save_keeps_state_and_reports() {
        let store = signed_in().await;
        let mut editor = ProfileEditor::open(&store).unwrap();
        editor.begin_editing();
        editor.set_name("Dr. Test").unwrap();
        let before = editor.to_profile();

        let gateway = FakeGateway {
            fail_with: Some(500),
            ..FakeGateway::default()
        };
        let err = editor.save(&gateway).await.unwrap_err();

        assert!(matches!(
            err,
            ProfileError::SaveFailed(ClientError::Api { status: 500, .. })
        ));
        assert!(editor.is_editing());
        assert_eq!(editor.to_profile(), before);
        assert!(editor.last_error().is_some());
    }

    #[tokio::test]
    async fn empty_title_blocks_save_without_a_request() {
        let store = signed_in().await;
        let profile = Profile {
            past_research: vec![ResearchItem::new("")],
            ..Profile::for_user("Test User", "test@example.com")
        };
        let mut editor = ProfileEditor::from_profile(&store, profile).unwrap();

        let gateway = FakeGateway::default();
        let err = editor.save(&gateway).await.unwrap_err();
        assert!(matches!(err, ProfileError::Core(CoreError::Validation(_))));
        assert!(gateway.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn from_profile_keeps_session_email() {
        let store = signed_in().await;
        let profile = Profile::for_user("Someone", "spoofed@example.com");
        let editor = ProfileEditor::from_profile(&store, profile).unwrap();
        assert_eq!(editor.email(), "test@example.com");
        assert_eq!(editor.name(), "Someone");
    }
}
