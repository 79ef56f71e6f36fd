use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenModal {
    #[default]
    None,
    Contact,
    Privacy,
}

pub enum ModalAction {
    OpenContact,
    OpenPrivacy,
    /// Close button, backdrop click or Escape.
    Close,
}

/// At most one modal is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub open: OpenModal,
}

impl ModalState {
    pub fn is_open(&self, modal: OpenModal) -> bool {
        self.open == modal && modal != OpenModal::None
    }

    pub fn any_open(&self) -> bool {
        self.open != OpenModal::None
    }

    /// Value for `body.style.overflow`; page scroll is locked under a modal.
    pub fn body_overflow(&self) -> &'static str {
        if self.any_open() {
            "hidden"
        } else {
            "auto"
        }
    }
}

impl Reducible for ModalState {
    type Action = ModalAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let open = match action {
            ModalAction::OpenContact => OpenModal::Contact,
            ModalAction::OpenPrivacy => OpenModal::Privacy,
            ModalAction::Close => OpenModal::None,
        };
        if open == self.open {
            return self;
        }
        Rc::new(ModalState { open })
    }
}
