use glof_content::donations::{DonationForm, CAMPAIGNS};
use glof_content::login::{LoginForm, RegisterForm};
use glof_content::safety::WARNING_SIGNS;
use glof_shell::collaborators::{
    AuthGateway, Collaborator, PaymentGateway, Pledge, RegistrationRequest, Role, SignInRequest,
    Unwired,
};
use glof_shell::CollaboratorError;
use std::cell::RefCell;

#[derive(Default)]
struct RecordingPayments {
    pledges: RefCell<Vec<Pledge>>,
}

impl PaymentGateway for RecordingPayments {
    fn donate(&self, pledge: &Pledge) -> Result<(), CollaboratorError> {
        self.pledges.borrow_mut().push(pledge.clone());
        Ok(())
    }
}

#[derive(Default)]
struct RecordingAuth {
    sign_ins: RefCell<Vec<SignInRequest>>,
}

impl AuthGateway for RecordingAuth {
    fn sign_in(&self, request: &SignInRequest) -> Result<(), CollaboratorError> {
        self.sign_ins.borrow_mut().push(request.clone());
        Ok(())
    }

    fn register(&self, _request: &RegistrationRequest) -> Result<(), CollaboratorError> {
        Ok(())
    }

    fn guest_access(&self) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[test]
fn donation_hits_payment_stub() {
    let form = DonationForm::default();
    let result = form.submit(&Unwired, &CAMPAIGNS[3]);
    assert_eq!(
        result,
        Err(CollaboratorError::NotImplemented(Collaborator::Payment))
    );
}

#[test]
fn donation_pledge_carries_selected_amount() {
    let payments = RecordingPayments::default();
    let mut form = DonationForm::default();
    form.select(250);
    form.submit(&payments, &CAMPAIGNS[0]).expect("donate");
    assert_eq!(
        payments.pledges.borrow().as_slice(),
        [Pledge {
            campaign: "Emergency Shelter for Displaced Families".into(),
            amount: 250,
        }]
    );
}

#[test]
fn auth_actions_hit_their_stubs() {
    let login = LoginForm::default();
    assert_eq!(
        login.sign_in(&Unwired),
        Err(CollaboratorError::NotImplemented(Collaborator::SignIn))
    );
    assert_eq!(
        login.continue_as_guest(&Unwired),
        Err(CollaboratorError::NotImplemented(Collaborator::GuestAccess))
    );
    assert_eq!(
        RegisterForm::default().register(&Unwired),
        Err(CollaboratorError::NotImplemented(Collaborator::Registration))
    );
}

#[test]
fn sign_in_trims_email_and_keeps_role() {
    let auth = RecordingAuth::default();
    let form = LoginForm {
        role: Role::Admin,
        email: "  ranger@glof.np ".into(),
        password: " secret ".into(),
        ..LoginForm::default()
    };
    form.sign_in(&auth).expect("sign in");
    let requests = auth.sign_ins.borrow();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].email, "ranger@glof.np");
    assert_eq!(requests[0].password, " secret ");
    assert_eq!(requests[0].role, Role::Admin);
}

#[test]
fn datasets_serialize_with_lowercase_levels() {
    let json = serde_json::to_value(WARNING_SIGNS[0]).expect("json");
    assert_eq!(json["severity"], "high");
    assert_eq!(json["title"], "Unusual Water Conditions");
}
