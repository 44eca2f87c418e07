use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum User {
    Table,
    Id,
    Email,
    Pseudo,
    Password,
    Role,
    PseudoSearch,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Hotel {
    Table,
    Id,
    Name,
    Location,
    Description,
    PictureList,
    NameSearch,
    LocationSearch,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden, Clone)]
pub enum Booking {
    Table,
    Id,
    UserId,
    HotelId,
    CheckIn,
    CheckOut,
    Status,
    CreatedAt,
    UpdatedAt,
}
