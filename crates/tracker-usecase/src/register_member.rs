//! Register Member - Add a person to the tracker

use uuid::Uuid;

use tracker_domain::repository::member_repository::MemberRepository;
use tracker_domain::{Member, UserId};

use crate::dto::{MemberResponseDto, RegisterMemberDto};
use crate::error::UseCaseError;

pub struct RegisterMemberUseCase<M: MemberRepository> {
    members: M,
}

impl<M: MemberRepository> RegisterMemberUseCase<M> {
    pub fn new(members: M) -> Self {
        Self { members }
    }

    pub fn execute(
        &mut self,
        input: RegisterMemberDto,
    ) -> Result<MemberResponseDto, UseCaseError> {
        let id = UserId::new(Uuid::new_v4().to_string());
        let member = Member::new(id, input.name, input.email)?;

        self.members.save(&member)?;
        Ok(MemberResponseDto::from_domain(&member))
    }
}
