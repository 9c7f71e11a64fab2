//! Domain models for the point-of-sale and e-commerce entities.
//!
//! Each module holds the stored entity (serialized in list responses), the
//! validated input used for inserts, and the raw request body it comes from.

pub mod customer;
pub mod ecommerce_order;
pub mod inventory;
pub mod order;
pub mod product;
pub mod user;
pub mod validation;

pub use customer::{CreateCustomerRequest, Customer, NewCustomer};
pub use ecommerce_order::{
    CreateEcommerceOrderItemRequest, CreateEcommerceOrderRequest, EcommerceOrder,
    EcommerceOrderItem, NewEcommerceOrder, NewEcommerceOrderItem,
};
pub use inventory::{CreateInventoryRequest, Inventory, NewInventory};
pub use order::{CreateOrderItemRequest, CreateOrderRequest, NewOrder, NewOrderItem, Order, OrderItem};
pub use product::{CreateProductRequest, NewProduct, Product};
pub use user::{CreateUserRequest, NewUser, NewUserCredentials, User};
pub use validation::ValidationError;
