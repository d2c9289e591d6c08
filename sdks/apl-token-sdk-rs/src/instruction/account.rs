empty_instruction!(
    /// Revokes the delegate's authority.
    Revoke
);

empty_instruction!(
    /// Close an account by transferring all its lamports to the destination
    /// account. Non-native accounts may only be closed if their token amount
    /// is zero.
    CloseAccount
);

empty_instruction!(
    /// Freeze an initialized account using the mint's freeze authority.
    FreezeAccount
);

empty_instruction!(
    /// Thaw a frozen account using the mint's freeze authority.
    ThawAccount
);

empty_instruction!(
    /// Gets the required size of an account for the given mint.
    GetAccountDataSize
);
