//! GraphQL documents for the two catalog operations.

pub const LIST_PRODUCTS: &str = "
query ListProducts($region: String!, $locale: String!) {
  products(region: $region, locale: $locale) {
    uid
    title
    display_title
    url
  }
}
";

pub const GET_PRODUCT: &str = "
query GetProduct($uid: String!, $region: String!, $locale: String!) {
  product(uid: $uid, region: $region, locale: $locale) {
    uid
    title
    display_title
    url
    description
    tagline
    updated_product_specs
    prices
    details {
      technology {
        title
        content
      }
      feature_details {
        group_title
        group {
          title
          content
        }
      }
    }
  }
}
";
